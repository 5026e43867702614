//! Data models
//!
//! Shared between the data access layer and the console front-end.
//! All IDs are `i64`.

pub mod employee;

// Re-exports
pub use employee::*;
