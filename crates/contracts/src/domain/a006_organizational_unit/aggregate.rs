use crate::domain::a001_division::aggregate::{kind_of, Division, DivisionKind};
use crate::domain::a005_woreda::aggregate::{belongs_to, Woreda};
use crate::domain::common::{EntityId, NamedEntity};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Node of the organizational tree as returned by the backend, including the
/// denormalized display names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationalUnit {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub required_employees_no: Option<i64>,
    #[serde(default)]
    pub division: Option<EntityId>,
    #[serde(default)]
    pub sector_subdiv_type: Option<EntityId>,
    #[serde(default)]
    pub subcity_subdiv_type: Option<EntityId>,
    #[serde(default)]
    pub parent: Option<EntityId>,
    #[serde(default)]
    pub subcity: Option<EntityId>,
    #[serde(default)]
    pub woreda: Option<EntityId>,

    #[serde(default)]
    pub division_name: Option<String>,
    #[serde(default)]
    pub sector_subdiv_type_name: Option<String>,
    #[serde(default)]
    pub subcity_subdiv_type_name: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub subcity_name: Option<String>,
    #[serde(default)]
    pub woreda_name: Option<String>,
}

impl OrganizationalUnit {
    /// Division kind from the denormalized name, falling back to the
    /// division list when the backend omitted it.
    pub fn division_kind(&self, divisions: &[Division]) -> DivisionKind {
        match self.division_name.as_deref() {
            Some(name) => DivisionKind::from_name(name),
            None => kind_of(divisions, self.division).unwrap_or(DivisionKind::Other),
        }
    }
}

impl NamedEntity for OrganizationalUnit {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Draft (form state and create/update payload)
// ============================================================================

/// Form state of the create/edit dialog. Serializes to the flat id payload
/// the backend accepts; unset references go out as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizationalUnitDraft {
    #[serde(skip)]
    pub id: Option<EntityId>,
    pub name: String,
    pub required_employees_no: Option<i64>,
    pub division: Option<EntityId>,
    pub sector_subdiv_type: Option<EntityId>,
    pub subcity_subdiv_type: Option<EntityId>,
    pub parent: Option<EntityId>,
    pub subcity: Option<EntityId>,
    pub woreda: Option<EntityId>,
}

impl From<&OrganizationalUnit> for OrganizationalUnitDraft {
    fn from(unit: &OrganizationalUnit) -> Self {
        Self {
            id: Some(unit.id),
            name: unit.name.clone(),
            required_employees_no: unit.required_employees_no,
            division: unit.division,
            sector_subdiv_type: unit.sector_subdiv_type,
            subcity_subdiv_type: unit.subcity_subdiv_type,
            parent: unit.parent,
            subcity: unit.subcity,
            woreda: unit.woreda,
        }
    }
}

impl OrganizationalUnitDraft {
    /// Selecting a parent inherits its division and subdivision types and
    /// resets the location fields. Clearing it forces a manual division
    /// choice and drops both subdivision types; location stays.
    pub fn select_parent(&mut self, parent: Option<&OrganizationalUnit>) {
        match parent {
            Some(parent) => {
                self.parent = Some(parent.id);
                self.division = parent.division;
                self.sector_subdiv_type = parent.sector_subdiv_type;
                self.subcity_subdiv_type = parent.subcity_subdiv_type;
                self.subcity = None;
                self.woreda = None;
            }
            None => {
                self.parent = None;
                self.division = None;
                self.sector_subdiv_type = None;
                self.subcity_subdiv_type = None;
            }
        }
    }

    /// Manual division choice; a subdivision type of the other division is
    /// dropped.
    pub fn select_division(&mut self, division: Option<EntityId>, divisions: &[Division]) {
        self.division = division;
        let kind = kind_of(divisions, division).unwrap_or(DivisionKind::Other);
        if kind != DivisionKind::SectorOffice {
            self.sector_subdiv_type = None;
        }
        if kind != DivisionKind::Subcity {
            self.subcity_subdiv_type = None;
        }
    }

    /// Changing the subcity drops a woreda located elsewhere.
    pub fn select_subcity(&mut self, subcity: Option<EntityId>, woredas: &[Woreda]) {
        self.subcity = subcity;
        if let (Some(subcity), Some(woreda)) = (subcity, self.woreda) {
            if !belongs_to(woredas, woreda, subcity) {
                self.woreda = None;
            }
        }
    }

    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divisions() -> Vec<Division> {
        vec![
            Division { id: 1, name: "Subcity".into() },
            Division { id: 2, name: "Sector Office".into() },
            Division { id: 3, name: "College".into() },
        ]
    }

    fn parent() -> OrganizationalUnit {
        OrganizationalUnit {
            id: 40,
            name: "Bole Subcity Office".into(),
            division: Some(1),
            division_name: Some("Subcity".into()),
            subcity_subdiv_type: Some(7),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_parent_copies_and_clears() {
        let mut draft = OrganizationalUnitDraft {
            name: "Unit".into(),
            division: Some(2),
            sector_subdiv_type: Some(5),
            subcity: Some(11),
            woreda: Some(12),
            ..Default::default()
        };
        draft.select_parent(Some(&parent()));
        assert_eq!(draft.parent, Some(40));
        assert_eq!(draft.division, Some(1));
        assert_eq!(draft.sector_subdiv_type, None);
        assert_eq!(draft.subcity_subdiv_type, Some(7));
        assert_eq!(draft.subcity, None);
        assert_eq!(draft.woreda, None);
    }

    #[test]
    fn test_clear_parent_resets_division_keeps_location() {
        let mut draft = OrganizationalUnitDraft::default();
        draft.select_parent(Some(&parent()));
        draft.subcity = Some(11);
        draft.woreda = Some(12);
        draft.select_parent(None);
        assert_eq!(draft.parent, None);
        assert_eq!(draft.division, None);
        assert_eq!(draft.sector_subdiv_type, None);
        assert_eq!(draft.subcity_subdiv_type, None);
        assert_eq!(draft.subcity, Some(11));
        assert_eq!(draft.woreda, Some(12));
    }

    #[test]
    fn test_select_division_drops_inapplicable_types() {
        let mut draft = OrganizationalUnitDraft {
            sector_subdiv_type: Some(5),
            subcity_subdiv_type: Some(7),
            ..Default::default()
        };
        draft.select_division(Some(2), &divisions());
        assert_eq!(draft.sector_subdiv_type, Some(5));
        assert_eq!(draft.subcity_subdiv_type, None);

        draft.select_division(Some(3), &divisions());
        assert_eq!(draft.division, Some(3));
        assert_eq!(draft.sector_subdiv_type, None);
    }

    #[test]
    fn test_select_subcity_drops_foreign_woreda() {
        let woredas = vec![
            Woreda { id: 1, name: "W1".into(), subcity: 10, subcity_name: None },
            Woreda { id: 2, name: "W2".into(), subcity: 20, subcity_name: None },
        ];
        let mut draft = OrganizationalUnitDraft {
            subcity: Some(10),
            woreda: Some(1),
            ..Default::default()
        };
        draft.select_subcity(Some(10), &woredas);
        assert_eq!(draft.woreda, Some(1));
        draft.select_subcity(Some(20), &woredas);
        assert_eq!(draft.woreda, None);
    }

    #[test]
    fn test_payload_shape() {
        let draft = OrganizationalUnitDraft {
            id: Some(9),
            name: "  Yeka Health Office ".into(),
            division: Some(2),
            sector_subdiv_type: Some(5),
            ..Default::default()
        };
        let json = serde_json::to_value(draft.normalized()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Yeka Health Office",
                "required_employees_no": null,
                "division": 2,
                "sector_subdiv_type": 5,
                "subcity_subdiv_type": null,
                "parent": null,
                "subcity": null,
                "woreda": null
            })
        );
    }

    #[test]
    fn test_decode_with_nulls() {
        let unit: OrganizationalUnit = serde_json::from_str(
            r#"{"id": 3, "name": "Bole", "division": 1, "parent": null,
                "division_name": "Subcity", "required_employees_no": 25}"#,
        )
        .unwrap();
        assert_eq!(unit.parent, None);
        assert_eq!(unit.required_employees_no, Some(25));
        assert_eq!(unit.division_kind(&[]), DivisionKind::Subcity);
    }
}
