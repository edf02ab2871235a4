//! Field visibility and derivation for the organizational-unit form.
//!
//! `name`, `required_employees_no` and `parent` are always editable. With a
//! parent selected the division is inherited and the parent's division decides
//! the location fields; without one the manually chosen division decides.

use super::aggregate::{OrganizationalUnit, OrganizationalUnitDraft};
use crate::domain::a001_division::aggregate::{kind_of, Division, DivisionKind};
use crate::domain::common::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    RequiredEmployeesNo,
    Parent,
    Division,
    SectorSubdivType,
    SubcitySubdivType,
    Subcity,
    Woreda,
}

impl FormField {
    /// Render order of the form.
    pub const ALL: [FormField; 8] = [
        FormField::Name,
        FormField::RequiredEmployeesNo,
        FormField::Parent,
        FormField::Division,
        FormField::SectorSubdivType,
        FormField::SubcitySubdivType,
        FormField::Subcity,
        FormField::Woreda,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::RequiredEmployeesNo => "Required Employees",
            FormField::Parent => "Parent",
            FormField::Division => "Division",
            FormField::SectorSubdivType => "Sector Subdivision Type",
            FormField::SubcitySubdivType => "Subcity Subdivision Type",
            FormField::Subcity => "Subcity",
            FormField::Woreda => "Woreda",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMode {
    #[default]
    Hidden,
    Editable,
    /// Shown read-only; the value comes from the selected parent.
    Derived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldRule {
    pub mode: FieldMode,
    pub required: bool,
}

impl FieldRule {
    const fn editable(required: bool) -> Self {
        Self {
            mode: FieldMode::Editable,
            required,
        }
    }

    const fn derived(required: bool) -> Self {
        Self {
            mode: FieldMode::Derived,
            required,
        }
    }
}

/// Result of [`compute_visibility`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityMap {
    rules: [FieldRule; 8],
    /// Division inherited from the selected parent.
    pub derived_division: Option<EntityId>,
    /// Subcity subdivision type inherited from the selected parent.
    pub derived_subcity_subdiv_type: Option<EntityId>,
}

impl VisibilityMap {
    fn base() -> Self {
        let mut rules = [FieldRule::default(); 8];
        rules[FormField::Name.index()] = FieldRule::editable(true);
        rules[FormField::RequiredEmployeesNo.index()] = FieldRule::editable(false);
        rules[FormField::Parent.index()] = FieldRule::editable(false);
        Self {
            rules,
            derived_division: None,
            derived_subcity_subdiv_type: None,
        }
    }

    fn set(&mut self, field: FormField, rule: FieldRule) {
        self.rules[field.index()] = rule;
    }

    pub fn rule(&self, field: FormField) -> FieldRule {
        self.rules[field.index()]
    }

    pub fn is_visible(&self, field: FormField) -> bool {
        self.rule(field).mode != FieldMode::Hidden
    }

    pub fn is_derived(&self, field: FormField) -> bool {
        self.rule(field).mode == FieldMode::Derived
    }

    pub fn is_required(&self, field: FormField) -> bool {
        self.is_visible(field) && self.rule(field).required
    }

    pub fn visible_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| self.is_visible(*f))
            .collect()
    }
}

/// The candidate whose id equals `draft.parent`.
pub fn resolve_parent<'a>(
    draft: &OrganizationalUnitDraft,
    candidate_parents: &'a [OrganizationalUnit],
) -> Option<&'a OrganizationalUnit> {
    let parent_id = draft.parent?;
    candidate_parents.iter().find(|u| u.id == parent_id)
}

pub fn compute_visibility(
    draft: &OrganizationalUnitDraft,
    divisions: &[Division],
    candidate_parents: &[OrganizationalUnit],
) -> VisibilityMap {
    let mut map = VisibilityMap::base();

    match resolve_parent(draft, candidate_parents) {
        Some(parent) => {
            map.set(FormField::Division, FieldRule::derived(true));
            map.derived_division = parent.division;

            match parent.division_kind(divisions) {
                DivisionKind::Subcity => {
                    map.set(FormField::SubcitySubdivType, FieldRule::derived(true));
                    map.derived_subcity_subdiv_type = parent.subcity_subdiv_type;
                    map.set(FormField::Woreda, FieldRule::editable(false));
                }
                DivisionKind::SectorOffice => {
                    if parent.parent.is_some() {
                        map.set(FormField::Woreda, FieldRule::editable(false));
                    } else {
                        map.set(FormField::Subcity, FieldRule::editable(false));
                    }
                }
                _ => {}
            }
        }
        None => {
            map.set(FormField::Division, FieldRule::editable(true));

            match kind_of(divisions, draft.division) {
                Some(DivisionKind::Subcity) => {
                    map.set(FormField::Subcity, FieldRule::editable(false));
                }
                Some(DivisionKind::SectorOffice) => {
                    map.set(FormField::SectorSubdivType, FieldRule::editable(true));
                }
                _ => {}
            }
        }
    }

    map
}

/// Client-side checks run before submit; the first failing rule wins.
pub fn validate(draft: &OrganizationalUnitDraft, map: &VisibilityMap) -> Result<(), String> {
    if draft.name.trim().is_empty() {
        return Err("Organizational Unit Name is required.".into());
    }
    if map.is_required(FormField::Division) && draft.division.is_none() {
        return Err("Division is required.".into());
    }
    if map.is_required(FormField::SectorSubdivType) && draft.sector_subdiv_type.is_none() {
        return Err("Sector Subdivision Type is required for this division.".into());
    }
    if map.is_required(FormField::SubcitySubdivType) && draft.subcity_subdiv_type.is_none() {
        return Err("Subcity Subdivision Type is required for this division.".into());
    }
    if let Some(n) = draft.required_employees_no {
        if n < 0 {
            return Err("Required Employees cannot be negative.".into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divisions() -> Vec<Division> {
        vec![
            Division { id: 1, name: "Subcity".into() },
            Division { id: 2, name: "Sector Office".into() },
            Division { id: 3, name: "College".into() },
            Division { id: 4, name: "Hospital".into() },
        ]
    }

    fn unit(
        id: EntityId,
        division: EntityId,
        name: &str,
        parent: Option<EntityId>,
    ) -> OrganizationalUnit {
        OrganizationalUnit {
            id,
            name: format!("Unit {}", id),
            division: Some(division),
            division_name: Some(name.into()),
            parent,
            ..Default::default()
        }
    }

    fn candidates() -> Vec<OrganizationalUnit> {
        let mut subcity_root = unit(10, 1, "Subcity", None);
        subcity_root.subcity_subdiv_type = Some(70);
        vec![
            subcity_root,
            unit(20, 2, "Sector Office", None),
            unit(21, 2, "Sector Office", Some(20)),
            unit(30, 3, "College", None),
        ]
    }

    fn visible(map: &VisibilityMap) -> Vec<FormField> {
        map.visible_fields()
    }

    fn with_parent(parent: EntityId) -> OrganizationalUnitDraft {
        OrganizationalUnitDraft {
            name: "New".into(),
            parent: Some(parent),
            ..Default::default()
        }
    }

    fn with_division(division: Option<EntityId>) -> OrganizationalUnitDraft {
        OrganizationalUnitDraft {
            name: "New".into(),
            division,
            ..Default::default()
        }
    }

    #[test]
    fn test_always_visible_fields() {
        let map = compute_visibility(&OrganizationalUnitDraft::default(), &divisions(), &[]);
        assert_eq!(
            visible(&map),
            vec![
                FormField::Name,
                FormField::RequiredEmployeesNo,
                FormField::Parent,
                FormField::Division
            ]
        );
        assert_eq!(map.rule(FormField::Division).mode, FieldMode::Editable);
    }

    #[test]
    fn test_subcity_parent() {
        let map = compute_visibility(&with_parent(10), &divisions(), &candidates());
        assert!(map.is_derived(FormField::Division));
        assert_eq!(map.derived_division, Some(1));
        assert!(map.is_derived(FormField::SubcitySubdivType));
        assert_eq!(map.derived_subcity_subdiv_type, Some(70));
        assert_eq!(map.rule(FormField::Woreda).mode, FieldMode::Editable);
        assert!(!map.is_visible(FormField::Subcity));
        assert!(!map.is_visible(FormField::SectorSubdivType));
    }

    #[test]
    fn test_sector_office_parent_without_grandparent() {
        let map = compute_visibility(&with_parent(20), &divisions(), &candidates());
        assert!(map.is_visible(FormField::Subcity));
        assert!(!map.is_visible(FormField::Woreda));
        assert!(!map.is_visible(FormField::SectorSubdivType));
        assert_eq!(map.derived_division, Some(2));
    }

    #[test]
    fn test_sector_office_parent_with_grandparent() {
        let map = compute_visibility(&with_parent(21), &divisions(), &candidates());
        assert!(map.is_visible(FormField::Woreda));
        assert!(!map.is_visible(FormField::Subcity));
    }

    #[test]
    fn test_other_division_parent_adds_nothing() {
        let map = compute_visibility(&with_parent(30), &divisions(), &candidates());
        assert!(map.is_derived(FormField::Division));
        assert_eq!(
            visible(&map),
            vec![
                FormField::Name,
                FormField::RequiredEmployeesNo,
                FormField::Parent,
                FormField::Division
            ]
        );
    }

    #[test]
    fn test_parent_kind_falls_back_to_division_list() {
        let mut parent = unit(50, 1, "Subcity", None);
        parent.division_name = None;
        let map = compute_visibility(&with_parent(50), &divisions(), &[parent]);
        assert!(map.is_visible(FormField::SubcitySubdivType));
        assert!(map.is_visible(FormField::Woreda));
    }

    #[test]
    fn test_unknown_parent_behaves_as_root() {
        let map = compute_visibility(&with_parent(999), &divisions(), &candidates());
        assert_eq!(map.rule(FormField::Division).mode, FieldMode::Editable);
    }

    #[test]
    fn test_manual_division() {
        let subcity = compute_visibility(&with_division(Some(1)), &divisions(), &[]);
        assert!(subcity.is_visible(FormField::Subcity));
        assert!(!subcity.is_visible(FormField::SectorSubdivType));
        assert!(!subcity.is_visible(FormField::SubcitySubdivType));
        assert!(!subcity.is_visible(FormField::Woreda));

        let sector = compute_visibility(&with_division(Some(2)), &divisions(), &[]);
        assert!(sector.is_visible(FormField::SectorSubdivType));
        assert!(sector.is_required(FormField::SectorSubdivType));
        assert!(!sector.is_visible(FormField::Subcity));

        for division in [Some(3), Some(4), None] {
            let map = compute_visibility(&with_division(division), &divisions(), &[]);
            assert!(!map.is_visible(FormField::SectorSubdivType));
            assert!(!map.is_visible(FormField::Subcity));
            assert!(!map.is_visible(FormField::SubcitySubdivType));
            assert!(!map.is_visible(FormField::Woreda));
        }
    }

    #[test]
    fn test_select_then_clear_parent() {
        let all = candidates();
        let mut draft = with_division(Some(2));
        draft.sector_subdiv_type = Some(5);
        draft.select_parent(resolve_parent(&with_parent(10), &all));
        assert_eq!(draft.subcity_subdiv_type, Some(70));
        draft.select_parent(None);
        assert_eq!(draft.division, None);
        assert_eq!(draft.sector_subdiv_type, None);
        assert_eq!(draft.subcity_subdiv_type, None);
        let map = compute_visibility(&draft, &divisions(), &all);
        assert_eq!(map.rule(FormField::Division).mode, FieldMode::Editable);
    }

    #[test]
    fn test_validate() {
        let divisions = divisions();
        let all = candidates();

        let mut draft = with_division(Some(2));
        draft.name = "  ".into();
        let map = compute_visibility(&draft, &divisions, &all);
        assert_eq!(
            validate(&draft, &map),
            Err("Organizational Unit Name is required.".to_string())
        );

        draft.name = "Health Office".into();
        assert_eq!(
            validate(&draft, &map),
            Err("Sector Subdivision Type is required for this division.".to_string())
        );
        draft.sector_subdiv_type = Some(5);
        assert!(validate(&draft, &map).is_ok());

        let root = with_division(None);
        let map = compute_visibility(&root, &divisions, &all);
        assert_eq!(validate(&root, &map), Err("Division is required.".to_string()));

        let mut child = with_parent(10);
        child.select_parent(resolve_parent(&child, &all));
        child.subcity_subdiv_type = None;
        let map = compute_visibility(&child, &divisions, &all);
        assert_eq!(
            validate(&child, &map),
            Err("Subcity Subdivision Type is required for this division.".to_string())
        );
    }

    #[test]
    fn test_validate_negative_required_employees() {
        let mut draft = with_division(Some(3));
        draft.required_employees_no = Some(-1);
        let map = compute_visibility(&draft, &divisions(), &[]);
        assert!(validate(&draft, &map).is_err());
    }
}
