//! Woreda form
//!
//! - view_model.rs: form state, subcity options and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::WoredaDetails;
pub use view_model::WoredaDetailsViewModel;
