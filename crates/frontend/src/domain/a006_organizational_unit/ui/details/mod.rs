//! Organizational Unit form
//!
//! MVVM:
//! - model.rs: reference data loading and save
//! - view_model.rs: draft, field rules and commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::OrganizationalUnitDetails;
pub use view_model::OrganizationalUnitDetailsViewModel;
