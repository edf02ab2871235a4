//! Employee form: view_model.rs holds state and commands, view.rs the UI.

mod view;
mod view_model;

pub use view::EmployeeDetails;
pub use view_model::EmployeeDetailsViewModel;
