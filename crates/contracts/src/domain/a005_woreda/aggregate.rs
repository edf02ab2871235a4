use crate::domain::common::{EntityId, NamedEntity};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Smallest administrative subdivision; belongs to exactly one subcity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Woreda {
    pub id: EntityId,
    pub name: String,
    pub subcity: EntityId,
    #[serde(default)]
    pub subcity_name: Option<String>,
}

impl NamedEntity for Woreda {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Woreda options offered for `subcity`. Without a subcity every woreda is
/// offered.
pub fn options_for_subcity(woredas: &[Woreda], subcity: Option<EntityId>) -> Vec<Woreda> {
    match subcity {
        Some(subcity) => woredas
            .iter()
            .filter(|w| w.subcity == subcity)
            .cloned()
            .collect(),
        None => woredas.to_vec(),
    }
}

/// Whether `woreda` lies in `subcity`. Unknown woredas are treated as not
/// belonging.
pub fn belongs_to(woredas: &[Woreda], woreda: EntityId, subcity: EntityId) -> bool {
    woredas
        .iter()
        .any(|w| w.id == woreda && w.subcity == subcity)
}

// ============================================================================
// DTO
// ============================================================================

/// Create/update payload: `{name, subcity}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoredaDto {
    #[serde(skip)]
    pub id: Option<EntityId>,
    pub name: String,
    pub subcity: Option<EntityId>,
}

impl WoredaDto {
    pub fn for_edit(woreda: &Woreda) -> Self {
        Self {
            id: Some(woreda.id),
            name: woreda.name.clone(),
            subcity: Some(woreda.subcity),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() || self.subcity.is_none() {
            return Err("Woreda name and Subcity are required.".into());
        }
        Ok(())
    }

    pub fn normalized(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.trim().to_string(),
            subcity: self.subcity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn woreda(id: EntityId, subcity: EntityId) -> Woreda {
        Woreda {
            id,
            name: format!("Woreda {}", id),
            subcity,
            subcity_name: None,
        }
    }

    #[test]
    fn test_options_filtered_by_subcity() {
        let all = vec![woreda(1, 10), woreda(2, 20), woreda(3, 10)];
        let ids: Vec<_> = options_for_subcity(&all, Some(10))
            .iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(options_for_subcity(&all, None), all);
        assert!(options_for_subcity(&all, Some(99)).is_empty());
    }

    #[test]
    fn test_belongs_to() {
        let all = vec![woreda(1, 10), woreda(2, 20)];
        assert!(belongs_to(&all, 1, 10));
        assert!(!belongs_to(&all, 1, 20));
        assert!(!belongs_to(&all, 5, 10));
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = WoredaDto {
            id: None,
            name: "Woreda 01".into(),
            subcity: None,
        };
        assert_eq!(
            dto.validate(),
            Err("Woreda name and Subcity are required.".to_string())
        );
        dto.subcity = Some(3);
        assert!(dto.validate().is_ok());
        dto.name = " ".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_decode_without_subcity_name() {
        let w: Woreda =
            serde_json::from_str(r#"{"id": 4, "name": "Woreda 04", "subcity": 2}"#).unwrap();
        assert_eq!(w.subcity, 2);
        assert_eq!(w.subcity_name, None);
    }
}
