use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    pub fname: String,
    #[serde(default)]
    pub mname: String,
    pub lname: String,
    #[serde(default)]
    pub phone_no: String,
    pub organizationalunit: EntityId,
    #[serde(default)]
    pub role: Option<EntityId>,

    #[serde(default)]
    pub organizationalunit_name: Option<String>,
    #[serde(default)]
    pub role_name: Option<String>,
}

// ============================================================================
// DTO
// ============================================================================

/// Create/update payload. The unit and the role travel as ids only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeeDto {
    #[serde(skip)]
    pub id: Option<EntityId>,
    pub fname: String,
    pub mname: String,
    pub lname: String,
    pub phone_no: String,
    pub organizationalunit: Option<EntityId>,
    pub role: Option<EntityId>,
    /// Display name of the picked unit; never sent.
    #[serde(skip)]
    pub organizationalunit_name: String,
}

impl EmployeeDto {
    pub fn for_edit(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id),
            fname: employee.fname.clone(),
            mname: employee.mname.clone(),
            lname: employee.lname.clone(),
            phone_no: employee.phone_no.clone(),
            organizationalunit: Some(employee.organizationalunit),
            role: employee.role,
            organizationalunit_name: employee.organizationalunit_name.clone().unwrap_or_default(),
        }
    }

    pub fn select_unit(&mut self, id: EntityId, name: &str) {
        self.organizationalunit = Some(id);
        self.organizationalunit_name = name.to_string();
    }

    pub fn validate(&self) -> Result<(), String> {
        let required = [
            (&self.fname, "First Name"),
            (&self.mname, "Middle Name"),
            (&self.lname, "Last Name"),
            (&self.phone_no, "Phone Number"),
        ];
        for (value, label) in required {
            if value.trim().is_empty() {
                return Err(format!("{} is required.", label));
            }
        }
        if self.organizationalunit.is_none() {
            return Err("Organizational Unit is required.".into());
        }
        Ok(())
    }

    pub fn normalized(&self) -> Self {
        Self {
            fname: self.fname.trim().to_string(),
            mname: self.mname.trim().to_string(),
            lname: self.lname.trim().to_string(),
            phone_no: self.phone_no.trim().to_string(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> EmployeeDto {
        EmployeeDto {
            id: Some(4),
            fname: "Abebe".into(),
            mname: "Kebede".into(),
            lname: "Tesfaye".into(),
            phone_no: " 0911000000 ".into(),
            organizationalunit: None,
            role: None,
            organizationalunit_name: String::new(),
        }
    }

    #[test]
    fn test_validate() {
        let mut d = dto();
        assert_eq!(d.validate(), Err("Organizational Unit is required.".to_string()));
        d.select_unit(12, "Bole Health Office");
        assert!(d.validate().is_ok());
        d.mname = "".into();
        assert_eq!(d.validate(), Err("Middle Name is required.".to_string()));
    }

    #[test]
    fn test_payload_sends_ids_only() {
        let mut d = dto();
        d.select_unit(12, "Bole Health Office");
        let json = serde_json::to_value(d.normalized()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fname": "Abebe",
                "mname": "Kebede",
                "lname": "Tesfaye",
                "phone_no": "0911000000",
                "organizationalunit": 12,
                "role": null
            })
        );
    }
}
