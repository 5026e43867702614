//! Shared types for the employee desk
//!
//! The employee record exchanged with the REST API, the editable form state
//! that produces it, and the client-side field rules.

pub mod form;
pub mod models;
pub mod validation;

// Re-exports
pub use form::{EmployeeForm, FormMode};
pub use models::Employee;
pub use serde::{Deserialize, Serialize};
pub use validation::{Field, FieldError, Rule, ValidationErrors};
