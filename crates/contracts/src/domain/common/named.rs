use super::EntityId;
use serde::{Deserialize, Serialize};

/// Lookup-table record shaped as `{id, name}`.
pub trait NamedEntity {
    fn id(&self) -> EntityId;
    fn name(&self) -> &str;
}

/// Resolve the display name of `id` within a reference list.
pub fn name_by_id<T: NamedEntity>(items: &[T], id: Option<EntityId>) -> Option<&str> {
    let id = id?;
    items.iter().find(|item| item.id() == id).map(|item| item.name())
}

/// Create/update payload for the name-only lookup tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDto {
    #[serde(skip)]
    pub id: Option<EntityId>,
    pub name: String,
}

impl NameDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn for_edit<T: NamedEntity>(item: &T) -> Self {
        Self {
            id: Some(item.id()),
            name: item.name().to_string(),
        }
    }

    /// Validation before submit. `label` is the capitalised entity name.
    pub fn validate(&self, label: &str) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("{} name is required.", label));
        }
        Ok(())
    }

    /// Payload with the name trimmed.
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(EntityId, &'static str);

    impl NamedEntity for Item {
        fn id(&self) -> EntityId {
            self.0
        }

        fn name(&self) -> &str {
            self.1
        }
    }

    #[test]
    fn test_name_by_id() {
        let items = vec![Item(1, "Bole"), Item(2, "Yeka")];
        assert_eq!(name_by_id(&items, Some(2)), Some("Yeka"));
        assert_eq!(name_by_id(&items, Some(9)), None);
        assert_eq!(name_by_id(&items, None), None);
    }

    #[test]
    fn test_name_dto_validation_and_payload() {
        assert_eq!(
            NameDto::new("   ").validate("Subcity"),
            Err("Subcity name is required.".to_string())
        );
        assert!(NameDto::new("Bole").validate("Subcity").is_ok());

        let mut dto = NameDto::new("  Bole ");
        dto.id = Some(5);
        let json = serde_json::to_value(dto.normalized()).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Bole" }));
    }
}
