//! Page category constants.
//!
//! Every page declares an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a005_woreda--list"`) and a `data-page-category` from below, so
//! an id copied from the DOM inspector leads straight to `domain/a005_woreda/`.

/// List of records with search and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Landing page with navigation cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Login and other system pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
