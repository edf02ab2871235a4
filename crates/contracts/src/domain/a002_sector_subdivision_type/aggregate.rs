use crate::domain::common::{EntityId, NamedEntity};
use serde::{Deserialize, Serialize};

/// Secondary classification of sector-office units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorSubdivisionType {
    pub id: EntityId,
    pub name: String,
}

impl NamedEntity for SectorSubdivisionType {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
