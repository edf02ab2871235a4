//! Shared contracts between the console frontend and the employee-tracker API.
//!
//! Everything here is plain data and pure logic, so it builds and tests
//! natively without a browser.

pub mod domain;
pub mod shared;
pub mod system;
