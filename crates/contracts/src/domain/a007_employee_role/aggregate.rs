use crate::domain::common::{EntityId, NamedEntity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRole {
    pub id: EntityId,
    pub role: String,
}

impl NamedEntity for EmployeeRole {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.role
    }
}
