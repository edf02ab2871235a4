//! Aggregate Picker System
//!
//! Paginated, searchable single-select table for choosing a record,
//! usually shown inside a [`Modal`](crate::shared::modal::Modal).
//!
//! ## Usage
//!
//! ```rust,ignore
//! impl AggregatePickerResult for MyItem { ... }
//! impl TableDisplayable for MyItem { ... }
//!
//! let controller = ListController::<MyItem>::remote(client, Resource::Employees);
//! view! {
//!     <GenericAggregatePicker
//!         controller=controller
//!         on_confirm=Callback::new(|item| { /* ... */ })
//!         on_cancel=Callback::new(|_| { /* ... */ })
//!     />
//! }
//! ```

pub mod component;
pub mod traits;

pub use component::GenericAggregatePicker;
pub use traits::{AggregatePickerResult, TableDisplayable};
