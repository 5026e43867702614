//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee record as exchanged with the REST API
///
/// `id == 0` marks a record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub age: i32,
    pub salary: f64,
    pub department: String,
    #[serde(default)]
    pub status: bool,
}

impl Employee {
    /// Sentinel id for records the server has not assigned an id to
    pub const NEW_ID: i64 = 0;

    /// Whether submitting this record should create rather than update
    pub fn is_new(&self) -> bool {
        self.id == Self::NEW_ID
    }

    /// Human-readable status label
    pub fn status_label(&self) -> &'static str {
        if self.status { "Active" } else { "Inactive" }
    }
}
