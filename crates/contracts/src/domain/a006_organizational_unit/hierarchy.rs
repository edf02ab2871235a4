use super::aggregate::OrganizationalUnit;
use crate::domain::common::EntityId;
use std::collections::HashMap;

/// Tree depth is capped at three levels (unit, parent, grandparent).
pub const MAX_DEPTH: usize = 3;

fn parent_of(by_id: &HashMap<EntityId, &OrganizationalUnit>, id: EntityId) -> Option<EntityId> {
    by_id.get(&id).and_then(|u| u.parent)
}

/// Number of ancestors of `unit`. `None` when the chain leads to a unit
/// missing from `by_id`, so the depth is unknown. Stops on cycles.
fn ancestor_count(
    by_id: &HashMap<EntityId, &OrganizationalUnit>,
    unit: &OrganizationalUnit,
) -> Option<usize> {
    let mut count = 0;
    let mut current = unit.parent;
    while let Some(id) = current {
        count += 1;
        if count > by_id.len() {
            break;
        }
        current = by_id.get(&id)?.parent;
    }
    Some(count)
}

/// Whether `ancestor` appears in the parent chain of `unit`.
fn descends_from(
    by_id: &HashMap<EntityId, &OrganizationalUnit>,
    unit: &OrganizationalUnit,
    ancestor: EntityId,
) -> bool {
    let mut current = unit.parent;
    let mut steps = 0;
    while let Some(id) = current {
        if id == ancestor {
            return true;
        }
        steps += 1;
        if steps > by_id.len() {
            return false;
        }
        current = parent_of(by_id, id);
    }
    false
}

/// Units that may become the parent of `editing` (or of a new unit when
/// `None`). Excludes the unit itself and its descendants, colleges and
/// hospitals, units that already sit at the deepest level a parent may
/// occupy, and units whose ancestry cannot be resolved from `all`.
pub fn candidate_parents(
    all: &[OrganizationalUnit],
    editing: Option<EntityId>,
) -> Vec<OrganizationalUnit> {
    let by_id: HashMap<EntityId, &OrganizationalUnit> = all.iter().map(|u| (u.id, u)).collect();

    all.iter()
        .filter(|u| Some(u.id) != editing)
        .filter(|u| editing.map_or(true, |id| !descends_from(&by_id, u, id)))
        .filter(|u| !u.division_kind(&[]).is_leaf_institution())
        .filter(|u| ancestor_count(&by_id, u).is_some_and(|n| n < MAX_DEPTH - 1))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(id: EntityId, division: &str, parent: Option<EntityId>) -> OrganizationalUnit {
        OrganizationalUnit {
            id,
            name: format!("Unit {}", id),
            division_name: Some(division.into()),
            parent,
            ..Default::default()
        }
    }

    fn tree() -> Vec<OrganizationalUnit> {
        vec![
            unit(1, "Sector Office", None),
            unit(2, "Sector Office", Some(1)),
            unit(3, "Sector Office", Some(2)),
            unit(4, "College", None),
            unit(5, "Hospital", Some(1)),
            unit(6, "Subcity", None),
        ]
    }

    fn ids(units: &[OrganizationalUnit]) -> Vec<EntityId> {
        units.iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_new_unit_candidates() {
        // 3 has a grandparent, 4 and 5 are leaf institutions.
        assert_eq!(ids(&candidate_parents(&tree(), None)), vec![1, 2, 6]);
    }

    #[test]
    fn test_editing_excludes_self_and_descendants() {
        assert_eq!(ids(&candidate_parents(&tree(), Some(1))), vec![6]);
        assert_eq!(ids(&candidate_parents(&tree(), Some(6))), vec![1, 2]);
    }

    #[test]
    fn test_unresolvable_parent_is_excluded() {
        let partial = vec![unit(1, "Sector Office", None), unit(3, "Sector Office", Some(2))];
        assert_eq!(ids(&candidate_parents(&partial, None)), vec![1]);
    }

    #[test]
    fn test_cycle_does_not_hang() {
        let looped = vec![unit(1, "Subcity", Some(2)), unit(2, "Subcity", Some(1))];
        let result = candidate_parents(&looped, None);
        assert!(result.len() <= 2);
    }
}
