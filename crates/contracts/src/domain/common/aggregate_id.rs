/// Primary key type used by every employee-tracker resource.
pub type EntityId = i64;

/// Conversion between ids and the string values carried by `<select>`
/// options and query strings.
pub trait AggregateId: Copy + Sized {
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;

    /// Empty or unparsable input maps to `None`, the "nothing selected" option.
    fn from_optional_str(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        Self::from_string(trimmed).ok()
    }
}

impl AggregateId for EntityId {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>().map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

/// Option value for a selected id; `""` selects the placeholder option.
pub fn option_value(id: Option<EntityId>) -> String {
    id.map(|v| v.as_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_optional_str() {
        assert_eq!(EntityId::from_optional_str("42"), Some(42));
        assert_eq!(EntityId::from_optional_str(" 7 "), Some(7));
        assert_eq!(EntityId::from_optional_str(""), None);
        assert_eq!(EntityId::from_optional_str("abc"), None);
    }

    #[test]
    fn test_option_value() {
        assert_eq!(option_value(Some(3)), "3");
        assert_eq!(option_value(None), "");
    }
}
