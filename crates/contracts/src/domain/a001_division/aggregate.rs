use crate::domain::common::{EntityId, NamedEntity};
use serde::{Deserialize, Serialize};

pub const SUBCITY: &str = "Subcity";
pub const SECTOR_OFFICE: &str = "Sector Office";
pub const COLLEGE: &str = "College";
pub const HOSPITAL: &str = "Hospital";

/// Top-level classification of an organizational unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub id: EntityId,
    pub name: String,
}

impl Division {
    pub fn kind(&self) -> DivisionKind {
        DivisionKind::from_name(&self.name)
    }
}

impl NamedEntity for Division {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Division names the form and detail rules branch on. Matching is exact,
/// the backend owns the spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DivisionKind {
    Subcity,
    SectorOffice,
    College,
    Hospital,
    Other,
}

impl DivisionKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            SUBCITY => DivisionKind::Subcity,
            SECTOR_OFFICE => DivisionKind::SectorOffice,
            COLLEGE => DivisionKind::College,
            HOSPITAL => DivisionKind::Hospital,
            _ => DivisionKind::Other,
        }
    }

    pub fn from_optional_name(name: Option<&str>) -> Self {
        name.map(Self::from_name).unwrap_or(DivisionKind::Other)
    }

    /// Leaf institutions never parent other units.
    pub fn is_leaf_institution(self) -> bool {
        matches!(self, DivisionKind::College | DivisionKind::Hospital)
    }
}

/// Kind of the division with `id`, if it is in `divisions`.
pub fn kind_of(divisions: &[Division], id: Option<EntityId>) -> Option<DivisionKind> {
    let id = id?;
    divisions.iter().find(|d| d.id == id).map(Division::kind)
}
