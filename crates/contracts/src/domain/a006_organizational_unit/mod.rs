pub mod aggregate;
pub mod details;
pub mod form_rules;
pub mod hierarchy;
