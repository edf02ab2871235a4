use super::aggregate::OrganizationalUnit;
use crate::domain::a001_division::aggregate::DivisionKind;
use crate::domain::common::{name_by_id, EntityId};

pub const NOT_AVAILABLE: &str = "N/A";

/// Parent shown in the unit form: "None" without a parent, [`NOT_AVAILABLE`]
/// when the parent is set but not among `units`.
pub fn parent_label(units: &[OrganizationalUnit], parent: Option<EntityId>) -> String {
    match parent {
        None => "None".to_string(),
        Some(_) => name_by_id(units, parent).unwrap_or(NOT_AVAILABLE).to_string(),
    }
}

/// One `label: value` line of the expanded row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: Option<&str>) -> Self {
        Self {
            label,
            value: value.unwrap_or(NOT_AVAILABLE).to_string(),
        }
    }
}

/// Read-only rows shown when a unit's row is expanded.
pub fn detail_rows(unit: &OrganizationalUnit) -> Vec<DetailRow> {
    let kind = DivisionKind::from_optional_name(unit.division_name.as_deref());
    let parent_name = unit.parent_name.as_deref().filter(|n| !n.is_empty());
    let mut rows = vec![
        DetailRow::new("Name", Some(&unit.name)),
        DetailRow::new("Division", unit.division_name.as_deref()),
    ];

    if kind == DivisionKind::SectorOffice {
        rows.push(DetailRow::new(
            "Sector Subdivision Type",
            unit.sector_subdiv_type_name.as_deref(),
        ));
    }
    if kind == DivisionKind::Subcity {
        rows.push(DetailRow::new(
            "Subcity Subdivision Type",
            unit.subcity_subdiv_type_name.as_deref(),
        ));
    }
    if parent_name.is_some() {
        rows.push(DetailRow::new("Parent", parent_name));
    }

    rows.push(DetailRow::new("Subcity", unit.subcity_name.as_deref()));

    // A root subcity unit is itself the subcity; it has no woreda.
    if !(kind == DivisionKind::Subcity && parent_name.is_none()) {
        rows.push(DetailRow::new("Woreda", unit.woreda_name.as_deref()));
    }

    if let Some(n) = unit.required_employees_no {
        rows.push(DetailRow {
            label: "Required Employees",
            value: n.to_string(),
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_division::aggregate::Division;
    use crate::domain::a002_sector_subdivision_type::aggregate::SectorSubdivisionType;
    use crate::domain::a003_subcity_subdivision_type::aggregate::SubcitySubdivisionType;
    use crate::domain::a006_organizational_unit::aggregate::OrganizationalUnitDraft;

    fn labels(rows: &[DetailRow]) -> Vec<&'static str> {
        rows.iter().map(|r| r.label).collect()
    }

    fn subcity_unit(parent_name: Option<&str>) -> OrganizationalUnit {
        OrganizationalUnit {
            id: 1,
            name: "Bole".into(),
            division_name: Some("Subcity".into()),
            subcity_subdiv_type_name: Some("Main".into()),
            parent_name: parent_name.map(Into::into),
            woreda_name: Some("Woreda 03".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_root_subcity_has_no_woreda() {
        let rows = detail_rows(&subcity_unit(None));
        assert_eq!(
            labels(&rows),
            vec!["Name", "Division", "Subcity Subdivision Type", "Subcity"]
        );
        assert_eq!(rows[3].value, "N/A");
    }

    #[test]
    fn test_child_subcity_shows_parent_and_woreda() {
        let rows = detail_rows(&subcity_unit(Some("Bole Subcity")));
        assert_eq!(
            labels(&rows),
            vec![
                "Name",
                "Division",
                "Subcity Subdivision Type",
                "Parent",
                "Subcity",
                "Woreda"
            ]
        );
        assert_eq!(rows[5].value, "Woreda 03");
    }

    #[test]
    fn test_sector_office_with_required_employees() {
        let unit = OrganizationalUnit {
            id: 2,
            name: "Health Office".into(),
            division_name: Some("Sector Office".into()),
            sector_subdiv_type_name: Some("Health".into()),
            required_employees_no: Some(12),
            ..Default::default()
        };
        let rows = detail_rows(&unit);
        assert_eq!(
            labels(&rows),
            vec![
                "Name",
                "Division",
                "Sector Subdivision Type",
                "Subcity",
                "Woreda",
                "Required Employees"
            ]
        );
        assert_eq!(rows[2].value, "Health");
        assert_eq!(rows[5].value, "12");
    }

    #[test]
    fn test_missing_division_name() {
        let unit = OrganizationalUnit {
            id: 3,
            name: "Unit".into(),
            ..Default::default()
        };
        let rows = detail_rows(&unit);
        assert_eq!(labels(&rows), vec!["Name", "Division", "Subcity", "Woreda"]);
        assert_eq!(rows[1].value, "N/A");
    }

    #[test]
    fn test_parent_label() {
        let units = vec![subcity_unit(None)];
        assert_eq!(parent_label(&units, None), "None");
        assert_eq!(parent_label(&units, Some(1)), "Bole");
        assert_eq!(parent_label(&units, Some(99)), NOT_AVAILABLE);
    }

    struct Reference {
        divisions: Vec<Division>,
        sector_types: Vec<SectorSubdivisionType>,
        subcity_types: Vec<SubcitySubdivisionType>,
        units: Vec<OrganizationalUnit>,
    }

    fn reference() -> Reference {
        let bole = OrganizationalUnit {
            id: 10,
            name: "Bole Subcity".into(),
            division: Some(1),
            division_name: Some("Subcity".into()),
            subcity_subdiv_type: Some(7),
            subcity_subdiv_type_name: Some("Main".into()),
            ..Default::default()
        };
        Reference {
            divisions: vec![
                Division { id: 1, name: "Subcity".into() },
                Division { id: 2, name: "Sector Office".into() },
            ],
            sector_types: vec![SectorSubdivisionType {
                id: 5,
                name: "Health".into(),
            }],
            subcity_types: vec![SubcitySubdivisionType {
                id: 7,
                name: "Main".into(),
            }],
            units: vec![bole],
        }
    }

    /// The record the backend returns after saving `draft`.
    fn stored(draft: &OrganizationalUnitDraft, r: &Reference) -> OrganizationalUnit {
        let owned = |name: Option<&str>| name.map(str::to_string);
        OrganizationalUnit {
            id: 100,
            name: draft.name.clone(),
            required_employees_no: draft.required_employees_no,
            division: draft.division,
            sector_subdiv_type: draft.sector_subdiv_type,
            subcity_subdiv_type: draft.subcity_subdiv_type,
            parent: draft.parent,
            subcity: draft.subcity,
            woreda: draft.woreda,
            division_name: owned(name_by_id(&r.divisions, draft.division)),
            sector_subdiv_type_name: owned(name_by_id(&r.sector_types, draft.sector_subdiv_type)),
            subcity_subdiv_type_name: owned(name_by_id(
                &r.subcity_types,
                draft.subcity_subdiv_type,
            )),
            parent_name: owned(name_by_id(&r.units, draft.parent)),
            subcity_name: None,
            woreda_name: None,
        }
    }

    fn row<'a>(rows: &'a [DetailRow], label: &str) -> Option<&'a str> {
        rows.iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }

    #[test]
    fn test_sector_office_root_then_subcity_child() {
        let r = reference();

        let mut root = OrganizationalUnitDraft {
            name: "Health Office".into(),
            ..Default::default()
        };
        root.select_division(Some(2), &r.divisions);
        root.sector_subdiv_type = Some(5);
        let rows = detail_rows(&stored(&root, &r));
        assert_eq!(row(&rows, "Sector Subdivision Type"), Some("Health"));
        assert_eq!(row(&rows, "Subcity Subdivision Type"), None);

        let mut child = root.clone();
        child.select_parent(Some(&r.units[0]));
        let rows = detail_rows(&stored(&child, &r));
        assert_eq!(row(&rows, "Sector Subdivision Type"), None);
        assert_eq!(row(&rows, "Subcity Subdivision Type"), Some("Main"));
        assert_eq!(row(&rows, "Parent"), Some("Bole Subcity"));
    }
}
