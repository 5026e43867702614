//! Employee Console - form & list front-end for the Employee API
//!
//! # Module structure
//!
//! ```text
//! employee-console/src/
//! ├── component.rs   # List snapshot, form, dialog state machine
//! ├── prompt.rs      # Confirmation / notice capability
//! ├── console.rs     # Interactive stdin/stdout rendering
//! ├── config.rs      # Environment configuration
//! └── logger.rs      # tracing subscriber setup
//! ```

pub mod component;
pub mod config;
pub mod console;
pub mod logger;
pub mod prompt;

pub use component::{DeleteOutcome, DialogState, EmployeeComponent, SubmitOutcome};
pub use config::Config;
pub use console::StdinPrompt;
pub use prompt::{Notice, Prompt};

pub fn print_banner() {
    println!("\n🦀 Employee Console");
    println!("===================\n");
}
