//! Sections of the center zone, keyed the same way as the `?active=` query.

pub mod registry;

pub use registry::render_section;

pub const DASHBOARD: &str = "dashboard";
pub const SECTOR_SUBDIVISION_TYPES: &str = "a002_sector_subdivision_type";
pub const SUBCITIES: &str = "a004_subcity";
pub const WOREDAS: &str = "a005_woreda";
pub const ORGANIZATIONAL_UNITS: &str = "a006_organizational_unit";
pub const EMPLOYEES: &str = "a008_employee";

/// Data-entry sections in menu order.
pub const DATA_ENTRY: [&str; 5] = [
    SECTOR_SUBDIVISION_TYPES,
    SUBCITIES,
    WOREDAS,
    ORGANIZATIONAL_UNITS,
    EMPLOYEES,
];

/// Analysis entries shown in the menu but not available yet.
pub const ANALYSIS: [&str; 3] = ["Employee Distribution", "Staffing Gaps", "Reports"];

pub fn is_known_section(key: &str) -> bool {
    key == DASHBOARD || DATA_ENTRY.contains(&key)
}

pub fn section_label(key: &str) -> &'static str {
    match key {
        DASHBOARD => "Dashboard",
        SECTOR_SUBDIVISION_TYPES => "Sector Subdivision Types",
        SUBCITIES => "Subcities",
        WOREDAS => "Woredas",
        ORGANIZATIONAL_UNITS => "Organizational Units",
        EMPLOYEES => "Employees",
        _ => "Unknown",
    }
}

pub fn section_icon(key: &str) -> &'static str {
    match key {
        DASHBOARD => "home",
        SECTOR_SUBDIVISION_TYPES => "layers",
        SUBCITIES => "map",
        WOREDAS => "map-pin",
        ORGANIZATIONAL_UNITS => "building",
        EMPLOYEES => "users",
        _ => "default",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_data_entry_section_has_a_label() {
        for key in DATA_ENTRY {
            assert!(is_known_section(key));
            assert_ne!(section_label(key), "Unknown");
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(is_known_section(DASHBOARD));
        assert!(!is_known_section("a001_division"));
        assert!(!is_known_section(""));
    }
}
