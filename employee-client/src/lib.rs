//! Employee Client - data access layer for the Employee REST API
//!
//! Every call is a direct proxy to one HTTP verb against the employee
//! resource URL. Failures come back as [`ClientError`]; nothing is retried
//! or cached.

pub mod config;
pub mod error;
pub mod http;
pub mod service;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use service::{EmployeeApi, EmployeeService};

// Re-export shared types for convenience
pub use shared::Employee;
