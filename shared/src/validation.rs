//! Employee form rules
//!
//! Client-side checks run before anything is sent to the API. Every rule is
//! evaluated and every failure collected, so the user sees all problems at
//! once instead of one per attempt.

use std::fmt;

use validator::ValidateEmail;

use crate::form::EmployeeForm;

// ── Limits ──────────────────────────────────────────────────────────

/// Youngest age accepted by the form
pub const MIN_AGE: i32 = 18;

/// Oldest age accepted by the form
pub const MAX_AGE: i32 = 60;

/// Exact number of digits in a mobile number
pub const MOBILE_DIGITS: usize = 10;

// ── Error types ─────────────────────────────────────────────────────

/// Form field a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Mobile,
    Age,
    Salary,
    Department,
}

impl Field {
    /// Label used in user-facing messages
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Mobile => "Mobile number",
            Field::Age => "Age",
            Field::Salary => "Salary",
            Field::Department => "Department",
        }
    }
}

/// Rule a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    Pattern,
    /// Present but not a finite number (`NaN`, `inf`)
    Number,
    Min(i32),
    Max(i32),
}

/// A single failed rule on a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub rule: Rule,
}

impl FieldError {
    pub fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }

    /// User-facing message, e.g. `Age must be at least 18.`
    pub fn message(&self) -> String {
        let label = self.field.label();
        match self.rule {
            Rule::Required => format!("{label} is required."),
            Rule::Email => "Invalid email format.".to_string(),
            Rule::Pattern => format!("{label} must be {MOBILE_DIGITS} digits."),
            Rule::Number => format!("{label} must be a number."),
            Rule::Min(min) => format!("{label} must be at least {min}."),
            Rule::Max(max) => format!("{label} cannot be more than {max}."),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// All rule failures of one submission, in field order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether `field` failed `rule`
    pub fn has(&self, field: Field, rule: Rule) -> bool {
        self.errors.contains(&FieldError::new(field, rule))
    }

    /// Whether `field` failed any rule
    pub fn has_field(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// One message per failed rule
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(FieldError::message).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

// ── Rules ───────────────────────────────────────────────────────────

/// Whether `value` is exactly [`MOBILE_DIGITS`] ASCII digits
pub fn is_mobile_number(value: &str) -> bool {
    value.len() == MOBILE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Run every rule against `form`, in field order.
///
/// Format rules (email, mobile pattern) only apply to non-empty input; an
/// empty field reports `Required` alone.
pub fn validate_form(form: &EmployeeForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if is_blank(&form.name) {
        errors.push(FieldError::new(Field::Name, Rule::Required));
    }

    if is_blank(&form.email) {
        errors.push(FieldError::new(Field::Email, Rule::Required));
    } else if !form.email.validate_email() {
        errors.push(FieldError::new(Field::Email, Rule::Email));
    }

    if is_blank(&form.mobile) {
        errors.push(FieldError::new(Field::Mobile, Rule::Required));
    } else if !is_mobile_number(&form.mobile) {
        errors.push(FieldError::new(Field::Mobile, Rule::Pattern));
    }

    match form.age {
        None => errors.push(FieldError::new(Field::Age, Rule::Required)),
        Some(age) if age < MIN_AGE => {
            errors.push(FieldError::new(Field::Age, Rule::Min(MIN_AGE)))
        }
        Some(age) if age > MAX_AGE => {
            errors.push(FieldError::new(Field::Age, Rule::Max(MAX_AGE)))
        }
        Some(_) => {}
    }

    match form.salary {
        None => errors.push(FieldError::new(Field::Salary, Rule::Required)),
        // serde_json writes non-finite floats as `null`
        Some(salary) if !salary.is_finite() => {
            errors.push(FieldError::new(Field::Salary, Rule::Number))
        }
        Some(_) => {}
    }

    if is_blank(&form.department) {
        errors.push(FieldError::new(Field::Department, Rule::Required));
    }

    errors
}
