//! Interactive console front-end
//!
//! A line-oriented rendering of the employee list and form dialog. Commands
//! are read from stdin; the dialog walks every form field, showing the
//! current value as the default.

use std::io::{self, BufRead, Write};

use employee_client::EmployeeService;
use shared::{Employee, EmployeeForm, FormMode};

use crate::component::{DeleteOutcome, EmployeeComponent, SubmitOutcome};
use crate::prompt::{Notice, Prompt};

/// Input that clears an optional field instead of keeping its value
pub const CLEAR_INPUT: &str = "-";

// ========== Prompt ==========

/// [`Prompt`] over stdin/stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn confirm(&self, message: &str) -> bool {
        match read_line(&format!("{message}? [y/N] ")) {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation");
                false
            }
        }
    }

    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Success(message) => println!("✅ {message}"),
            Notice::Invalid(messages) => {
                println!("⚠️  Please fix the following:");
                for message in messages {
                    println!("   - {message}");
                }
            }
            Notice::Failure(message) => println!("❌ {message}"),
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Print `prompt` and read one trimmed line; `None` at end of input
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

// ========== Commands ==========

/// Console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Edit(i64),
    Delete(i64),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("Too many arguments: {line}"));
    }

    let id = |arg: Option<&str>| -> Result<i64, String> {
        let arg = arg.ok_or_else(|| format!("Usage: {name} <id>"))?;
        arg.parse().map_err(|_| format!("Invalid employee id: {arg}"))
    };

    let command = match name.as_str() {
        "edit" => return id(arg).map(Command::Edit),
        "delete" | "rm" => return id(arg).map(Command::Delete),
        "list" | "ls" => Command::List,
        "add" | "new" => Command::Add,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "" => return Err("Empty command".to_string()),
        _ => return Err(format!("Unknown command: {name} (type 'help')")),
    };
    if arg.is_some() {
        return Err(format!("{name} takes no arguments"));
    }
    Ok(command)
}

fn print_help() {
    println!("Commands:");
    println!("  list           Reload and show all employees");
    println!("  add            Add a new employee");
    println!("  edit <id>      Edit an employee");
    println!("  delete <id>    Delete an employee");
    println!("  help           Show this help");
    println!("  quit           Exit");
}

// ========== Rendering ==========

/// Render the employee list as a fixed-width table
pub fn render_table(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "No employees.\n".to_string();
    }

    let mut out = format!(
        "{:>5}  {:<20} {:<28} {:<10} {:>3} {:>12}  {:<14} {}\n",
        "ID", "Name", "Email", "Mobile", "Age", "Salary", "Department", "Status"
    );
    for e in employees {
        out.push_str(&format!(
            "{:>5}  {:<20} {:<28} {:<10} {:>3} {:>12.2}  {:<14} {}\n",
            e.id,
            e.name,
            e.email,
            e.mobile,
            e.age,
            e.salary,
            e.department,
            e.status_label()
        ));
    }
    out
}

// ========== Form fields ==========

pub fn parse_age(input: &str) -> Result<Option<i32>, String> {
    if input == CLEAR_INPUT {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| format!("'{input}' is not a whole number"))
}

pub fn parse_salary(input: &str) -> Result<Option<f64>, String> {
    if input == CLEAR_INPUT {
        return Ok(None);
    }
    match input.parse::<f64>() {
        Ok(salary) if salary.is_finite() => Ok(Some(salary)),
        _ => Err(format!("'{input}' is not a number")),
    }
}

pub fn parse_status(input: &str) -> Result<bool, String> {
    match input.to_lowercase().as_str() {
        "y" | "yes" | "true" | "active" | "1" => Ok(true),
        "n" | "no" | "false" | "inactive" | "0" => Ok(false),
        _ => Err(format!("'{input}' is not yes/no")),
    }
}

/// Walk every form field, asking `ask(label, current)` for new input.
///
/// Empty input keeps the current value; [`CLEAR_INPUT`] clears a text or
/// number field. Unparsable input is reported and asked again. Returns
/// `Ok(false)` when `ask` runs out of input.
pub fn fill_form<F>(form: &mut EmployeeForm, mut ask: F) -> io::Result<bool>
where
    F: FnMut(&str, &str) -> io::Result<Option<String>>,
{
    for field in FORM_FIELDS {
        loop {
            let current = field.current(form);
            let Some(input) = ask(field.label(), &current)? else {
                return Ok(false);
            };
            if input.is_empty() {
                break;
            }
            match field.apply(form, &input) {
                Ok(()) => break,
                Err(msg) => println!("❌ {msg}"),
            }
        }
    }
    Ok(true)
}

#[derive(Debug, Clone, Copy)]
enum FormField {
    Name,
    Email,
    Mobile,
    Age,
    Salary,
    Department,
    Status,
}

const FORM_FIELDS: [FormField; 7] = [
    FormField::Name,
    FormField::Email,
    FormField::Mobile,
    FormField::Age,
    FormField::Salary,
    FormField::Department,
    FormField::Status,
];

impl FormField {
    fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Mobile => "Mobile",
            FormField::Age => "Age",
            FormField::Salary => "Salary",
            FormField::Department => "Department",
            FormField::Status => "Active (y/n)",
        }
    }

    fn current(self, form: &EmployeeForm) -> String {
        match self {
            FormField::Name => form.name.clone(),
            FormField::Email => form.email.clone(),
            FormField::Mobile => form.mobile.clone(),
            FormField::Age => form.age.map(|a| a.to_string()).unwrap_or_default(),
            FormField::Salary => form.salary.map(|s| s.to_string()).unwrap_or_default(),
            FormField::Department => form.department.clone(),
            FormField::Status => String::from(if form.status { "y" } else { "n" }),
        }
    }

    fn apply(self, form: &mut EmployeeForm, input: &str) -> Result<(), String> {
        let text = || {
            if input == CLEAR_INPUT {
                String::new()
            } else {
                input.to_string()
            }
        };
        match self {
            FormField::Name => form.name = text(),
            FormField::Email => form.email = text(),
            FormField::Mobile => form.mobile = text(),
            FormField::Age => form.age = parse_age(input)?,
            FormField::Salary => form.salary = parse_salary(input)?,
            FormField::Department => form.department = text(),
            FormField::Status => form.status = parse_status(input)?,
        }
        Ok(())
    }
}

fn ask_stdin(label: &str, current: &str) -> io::Result<Option<String>> {
    if current.is_empty() {
        read_line(&format!("{label}: "))
    } else {
        read_line(&format!("{label} [{current}]: "))
    }
}

// ========== Loop ==========

/// Run the command loop until `quit` or end of input
pub async fn run<S, P>(component: &mut EmployeeComponent<S, P>) -> io::Result<()>
where
    S: EmployeeService,
    P: Prompt,
{
    print!("{}", render_table(component.employees()));
    println!("Type 'help' for commands.");

    while let Some(line) = read_line("employees> ")? {
        if line.is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::List) => {
                component.refresh().await;
                print!("{}", render_table(component.employees()));
            }
            Ok(Command::Add) => {
                component.open_add();
                run_dialog(component).await?;
            }
            Ok(Command::Edit(id)) => match component.find(id).cloned() {
                Some(employee) => {
                    component.open_edit(&employee);
                    run_dialog(component).await?;
                }
                None => println!("❌ No employee with id {id}"),
            },
            Ok(Command::Delete(id)) => match component.find(id).cloned() {
                Some(employee) => {
                    if let DeleteOutcome::Deleted = component.delete(&employee).await {
                        print!("{}", render_table(component.employees()));
                    }
                }
                None => println!("❌ No employee with id {id}"),
            },
            Ok(Command::Help) => print_help(),
            Ok(Command::Quit) => break,
            Err(msg) => println!("❌ {msg}"),
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

/// Drive the open dialog until it is submitted or abandoned
async fn run_dialog<S, P>(component: &mut EmployeeComponent<S, P>) -> io::Result<()>
where
    S: EmployeeService,
    P: Prompt,
{
    while component.is_open() {
        let title = match component.mode() {
            FormMode::Add => "New employee".to_string(),
            FormMode::Edit => format!("Edit employee #{}", component.form().id),
        };
        println!("── {title} ── (Enter keeps a value, '{CLEAR_INPUT}' clears it)");

        if !fill_form(component.form_mut(), ask_stdin)? {
            component.close();
            break;
        }

        match component.submit().await {
            SubmitOutcome::Created(_) | SubmitOutcome::Updated(_) => {
                print!("{}", render_table(component.employees()));
            }
            SubmitOutcome::Invalid(_) | SubmitOutcome::Failed(_) => {
                let retry = read_line("Edit again? [Y/n] ")?
                    .is_some_and(|answer| answer.is_empty() || is_yes(&answer));
                if !retry {
                    component.close();
                }
            }
        }
    }
    Ok(())
}
