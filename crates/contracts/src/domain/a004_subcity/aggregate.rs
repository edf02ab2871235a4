use crate::domain::common::{EntityId, NamedEntity};
use serde::{Deserialize, Serialize};

/// Top administrative area of the city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcity {
    pub id: EntityId,
    pub name: String,
}

impl NamedEntity for Subcity {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
