//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod named;
pub mod resource;

// Re-exports
pub use aggregate_id::{option_value, AggregateId, EntityId};
pub use named::{name_by_id, NameDto, NamedEntity};
pub use resource::Resource;
