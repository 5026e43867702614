//! Employee form state
//!
//! The editable counterpart of [`Employee`]. Number inputs start blank, so
//! `age` and `salary` are optional until the user fills them in.

use serde::{Deserialize, Serialize};

use crate::models::Employee;
use crate::validation::{self, ValidationErrors};

/// Whether the form will create a new record or update an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// Employee form values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub age: Option<i32>,
    pub salary: Option<f64>,
    pub department: String,
    pub status: bool,
}

impl EmployeeForm {
    /// Overwrite every field with the values of `employee`
    pub fn patch(&mut self, employee: &Employee) {
        *self = Self::from(employee);
    }

    /// Back to defaults: `id = 0`, blank fields, `status = false`
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn mode(&self) -> FormMode {
        if self.id == Employee::NEW_ID {
            FormMode::Add
        } else {
            FormMode::Edit
        }
    }

    /// Check every rule and build the record to submit.
    pub fn validate(&self) -> Result<Employee, ValidationErrors> {
        let errors = validation::validate_form(self);

        // A blank age or salary always yields a `Required` error
        match (self.age, self.salary) {
            (Some(age), Some(salary)) if errors.is_empty() => Ok(Employee {
                id: self.id,
                name: self.name.clone(),
                email: self.email.clone(),
                mobile: self.mobile.clone(),
                age,
                salary,
                department: self.department.clone(),
                status: self.status,
            }),
            _ => Err(ValidationErrors::new(errors)),
        }
    }
}

impl From<&Employee> for EmployeeForm {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            email: employee.email.clone(),
            mobile: employee.mobile.clone(),
            age: Some(employee.age),
            salary: Some(employee.salary),
            department: employee.department.clone(),
            status: employee.status,
        }
    }
}
