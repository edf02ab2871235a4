use crate::domain::common::{EntityId, NamedEntity};
use serde::{Deserialize, Serialize};

/// Secondary classification of subcity units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcitySubdivisionType {
    pub id: EntityId,
    pub name: String,
}

impl NamedEntity for SubcitySubdivisionType {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
