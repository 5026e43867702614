//! User prompt capability
//!
//! Confirmation questions and user-facing notices go through [`Prompt`] so
//! the component never talks to a terminal (or a browser dialog) directly.

/// Message shown to the user after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Action completed
    Success(String),
    /// Form rejected; one message per failed rule
    Invalid(Vec<String>),
    /// Remote call failed
    Failure(String),
}

pub trait Prompt: Send + Sync {
    /// Ask a yes/no question; `true` means the user agreed
    fn confirm(&self, message: &str) -> bool;

    fn notify(&self, notice: Notice);
}
