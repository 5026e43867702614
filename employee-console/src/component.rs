//! Employee form & list component
//!
//! Owns the list snapshot, the form and the dialog visibility. All remote
//! work goes through an [`EmployeeService`]; all user interaction through a
//! [`Prompt`].
//!
//! # States
//!
//! - **Closed**: only the list is shown.
//! - **Open**: the form dialog is shown. Add vs Edit is decided by the form's
//!   `id` (`0` = add).
//!
//! ```text
//!            open_add / open_edit
//!   Closed ───────────────────────▶ Open
//!     ▲                              │
//!     └──── close / submit success ──┘
//! ```

use employee_client::{ClientError, EmployeeService};
use shared::{Employee, EmployeeForm, FormMode, ValidationErrors};

use crate::prompt::{Notice, Prompt};

/// Visibility of the form dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Result of [`EmployeeComponent::submit`]
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Form failed validation; nothing was sent
    Invalid(ValidationErrors),
    Created(Employee),
    Updated(Employee),
    /// Remote call failed; dialog and form are left untouched
    Failed(ClientError),
}

/// Result of [`EmployeeComponent::delete`]
#[derive(Debug)]
pub enum DeleteOutcome {
    /// User declined the confirmation
    Cancelled,
    Deleted,
    Failed(ClientError),
}

pub struct EmployeeComponent<S, P> {
    service: S,
    prompt: P,
    employees: Vec<Employee>,
    form: EmployeeForm,
    dialog: DialogState,
}

impl<S: EmployeeService, P: Prompt> EmployeeComponent<S, P> {
    pub fn new(service: S, prompt: P) -> Self {
        Self {
            service,
            prompt,
            employees: Vec::new(),
            form: EmployeeForm::default(),
            dialog: DialogState::Closed,
        }
    }

    /// Reset the form and load the list.
    pub async fn initialize(&mut self) {
        self.form.reset();
        self.refresh().await;
    }

    /// Replace the list with the server's current snapshot.
    ///
    /// A failed load keeps the previous snapshot and is reported through the
    /// prompt.
    pub async fn refresh(&mut self) {
        match self.service.list_all().await {
            Ok(employees) => {
                tracing::debug!(count = employees.len(), "Employee list loaded");
                self.employees = employees;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load employees");
                self.prompt
                    .notify(Notice::Failure(format!("Failed to load employees: {e}")));
            }
        }
    }

    /// Open the dialog with a blank form
    pub fn open_add(&mut self) {
        self.dialog = DialogState::Open;
    }

    /// Open the dialog with the form filled from `employee`
    pub fn open_edit(&mut self, employee: &Employee) {
        self.dialog = DialogState::Open;
        self.form.patch(employee);
    }

    /// Reset the form and hide the dialog, whatever the previous state
    pub fn close(&mut self) {
        self.form.reset();
        self.dialog = DialogState::Closed;
    }

    /// Validate the form and create or update the employee.
    ///
    /// On success the user is notified, the list is reloaded and the dialog
    /// closes. On a validation error or a failed call nothing changes.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let employee = match self.form.validate() {
            Ok(employee) => employee,
            Err(errors) => {
                tracing::debug!(errors = errors.len(), "Employee form rejected");
                self.prompt.notify(Notice::Invalid(errors.messages()));
                return SubmitOutcome::Invalid(errors);
            }
        };

        let (result, message) = if employee.is_new() {
            (
                self.service.create(&employee).await.map(SubmitOutcome::Created),
                "Employee Added Successfully",
            )
        } else {
            (
                self.service.update(&employee).await.map(SubmitOutcome::Updated),
                "Employee Updated Successfully",
            )
        };

        match result {
            Ok(outcome) => {
                tracing::info!(id = employee.id, name = %employee.name, "{message}");
                self.prompt.notify(Notice::Success(message.to_string()));
                self.refresh().await;
                self.close();
                outcome
            }
            Err(e) => {
                tracing::warn!(id = employee.id, error = %e, "Failed to save employee");
                self.prompt
                    .notify(Notice::Failure(format!("Failed to save employee: {e}")));
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Delete `employee` after the user confirms.
    pub async fn delete(&mut self, employee: &Employee) -> DeleteOutcome {
        let question = format!("Are you sure you want to delete this Employee {}", employee.name);
        if !self.prompt.confirm(&question) {
            return DeleteOutcome::Cancelled;
        }

        match self.service.delete_by_id(employee.id).await {
            Ok(()) => {
                tracing::info!(id = employee.id, name = %employee.name, "Employee deleted");
                self.prompt
                    .notify(Notice::Success("Employee Deleted Successfully".to_string()));
                self.refresh().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::warn!(id = employee.id, error = %e, "Failed to delete employee");
                self.prompt
                    .notify(Notice::Failure(format!("Failed to delete employee: {e}")));
                DeleteOutcome::Failed(e)
            }
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Look up an employee in the current snapshot
    pub fn find(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn is_open(&self) -> bool {
        self.dialog == DialogState::Open
    }

    pub fn mode(&self) -> FormMode {
        self.form.mode()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use employee_client::ClientResult;
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        ListAll,
        Create(Employee),
        Update(Employee),
        Delete(i64),
    }

    /// In-memory API that records every call
    #[derive(Default)]
    struct FakeService {
        calls: Mutex<Vec<Call>>,
        store: Mutex<Vec<Employee>>,
        last_id: Mutex<i64>,
        fail_writes: bool,
        fail_reads: bool,
    }

    impl FakeService {
        fn with_employees(employees: Vec<Employee>) -> Self {
            let last_id = employees.iter().map(|e| e.id).max().unwrap_or(0);
            Self {
                store: Mutex::new(employees),
                last_id: Mutex::new(last_id),
                ..Default::default()
            }
        }

        fn failing_writes(mut self) -> Self {
            self.fail_writes = true;
            self
        }

        fn failing_reads(mut self) -> Self {
            self.fail_reads = true;
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().clone()
        }

        fn writes(&self) -> Vec<Call> {
            self.calls()
                .into_iter()
                .filter(|c| *c != Call::ListAll)
                .collect()
        }

        fn server_error() -> ClientError {
            ClientError::Status {
                status: 500,
                body: "boom".to_string(),
            }
        }
    }

    #[async_trait]
    impl EmployeeService for FakeService {
        async fn list_all(&self) -> ClientResult<Vec<Employee>> {
            self.calls.lock().push(Call::ListAll);
            if self.fail_reads {
                return Err(Self::server_error());
            }
            Ok(self.store.lock().clone())
        }

        async fn create(&self, employee: &Employee) -> ClientResult<Employee> {
            self.calls.lock().push(Call::Create(employee.clone()));
            if self.fail_writes {
                return Err(Self::server_error());
            }
            let mut last_id = self.last_id.lock();
            *last_id += 1;
            let created = Employee {
                id: *last_id,
                ..employee.clone()
            };
            self.store.lock().push(created.clone());
            Ok(created)
        }

        async fn update(&self, employee: &Employee) -> ClientResult<Employee> {
            self.calls.lock().push(Call::Update(employee.clone()));
            if self.fail_writes {
                return Err(Self::server_error());
            }
            let mut store = self.store.lock();
            match store.iter_mut().find(|e| e.id == employee.id) {
                Some(existing) => {
                    *existing = employee.clone();
                    Ok(employee.clone())
                }
                None => Err(ClientError::NotFound(employee.id.to_string())),
            }
        }

        async fn delete_by_id(&self, id: i64) -> ClientResult<()> {
            self.calls.lock().push(Call::Delete(id));
            if self.fail_writes {
                return Err(Self::server_error());
            }
            self.store.lock().retain(|e| e.id != id);
            Ok(())
        }
    }

    /// Answers confirmations from a queue and records everything shown
    #[derive(Default)]
    struct ScriptedPrompt {
        answers: Mutex<VecDeque<bool>>,
        questions: Mutex<Vec<String>>,
        notices: Mutex<Vec<Notice>>,
    }

    impl ScriptedPrompt {
        fn answering(answers: &[bool]) -> Self {
            Self {
                answers: Mutex::new(answers.iter().copied().collect()),
                ..Default::default()
            }
        }

        fn notices(&self) -> Vec<Notice> {
            self.notices.lock().clone()
        }

        fn questions(&self) -> Vec<String> {
            self.questions.lock().clone()
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&self, message: &str) -> bool {
            self.questions.lock().push(message.to_string());
            self.answers.lock().pop_front().unwrap_or(false)
        }

        fn notify(&self, notice: Notice) {
            self.notices.lock().push(notice);
        }
    }

    type TestComponent = EmployeeComponent<FakeService, ScriptedPrompt>;

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            mobile: "1234567890".to_string(),
            age: 30,
            salary: 50000.0,
            department: "Eng".to_string(),
            status: true,
        }
    }

    fn alice_form() -> EmployeeForm {
        EmployeeForm {
            id: 0,
            name: "Alice".to_string(),
            email: "a@b.com".to_string(),
            mobile: "1234567890".to_string(),
            age: Some(30),
            salary: Some(50000.0),
            department: "Eng".to_string(),
            status: true,
        }
    }

    fn component(service: FakeService) -> TestComponent {
        EmployeeComponent::new(service, ScriptedPrompt::default())
    }

    #[tokio::test]
    async fn test_initialize_resets_form_and_loads_list() {
        let mut c = component(FakeService::with_employees(vec![
            employee(1, "Ann"),
            employee(2, "Ben"),
        ]));
        c.form_mut().name = "leftover".to_string();

        c.initialize().await;

        assert_eq!(c.form(), &EmployeeForm::default());
        assert_eq!(c.employees().len(), 2);
        assert_eq!(c.dialog(), DialogState::Closed);
        assert_eq!(c.service().calls(), vec![Call::ListAll]);
    }

    #[tokio::test]
    async fn test_initialize_with_unreachable_api_keeps_empty_list() {
        let mut c = component(FakeService::default().failing_reads());

        c.initialize().await;

        assert!(c.employees().is_empty());
        assert!(matches!(
            c.prompt().notices().as_slice(),
            [Notice::Failure(msg)] if msg.starts_with("Failed to load employees")
        ));
    }

    #[test]
    fn test_open_add_keeps_default_form() {
        let mut c = component(FakeService::default());

        c.open_add();

        assert!(c.is_open());
        assert_eq!(c.mode(), FormMode::Add);
        assert_eq!(c.form().id, 0);
    }

    #[test]
    fn test_open_edit_patches_form() {
        let mut c = component(FakeService::default());
        let ben = employee(2, "Ben");

        c.open_edit(&ben);

        assert!(c.is_open());
        assert_eq!(c.mode(), FormMode::Edit);
        assert_eq!(c.form(), &EmployeeForm::from(&ben));
    }

    #[test]
    fn test_close_always_restores_defaults() {
        let mut c = component(FakeService::default());

        c.close();
        assert_eq!(c.dialog(), DialogState::Closed);
        assert_eq!(c.form(), &EmployeeForm::default());

        c.open_edit(&employee(4, "Dan"));
        c.form_mut().department = "Changed".to_string();
        c.close();
        assert_eq!(c.dialog(), DialogState::Closed);
        assert_eq!(c.form(), &EmployeeForm::default());

        c.open_add();
        c.form_mut().name = "Half typed".to_string();
        c.close();
        assert_eq!(c.dialog(), DialogState::Closed);
        assert_eq!(c.form(), &EmployeeForm::default());
    }

    #[tokio::test]
    async fn test_submit_new_employee_creates_and_closes() {
        let mut c = component(FakeService::default());
        c.initialize().await;
        c.open_add();
        *c.form_mut() = alice_form();

        let created = match c.submit().await {
            SubmitOutcome::Created(employee) => employee,
            other => panic!("expected create, got {other:?}"),
        };
        assert_eq!(created.id, 1);
        assert_eq!(
            c.service().calls(),
            vec![
                Call::ListAll,
                Call::Create(alice_form().validate().unwrap()),
                Call::ListAll,
            ]
        );
        assert_eq!(c.employees(), &[created]);
        assert_eq!(c.form(), &EmployeeForm::default());
        assert_eq!(c.dialog(), DialogState::Closed);
        assert_eq!(
            c.prompt().notices(),
            vec![Notice::Success("Employee Added Successfully".to_string())]
        );
    }

    #[tokio::test]
    async fn test_open_edit_then_submit_issues_one_update() {
        let ben = employee(2, "Ben");
        let mut c = component(FakeService::with_employees(vec![employee(1, "Ann"), ben.clone()]));
        c.initialize().await;

        c.open_edit(&ben);
        let outcome = c.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Updated(ref e) if e.id == 2));
        assert_eq!(c.service().writes(), vec![Call::Update(ben)]);
        assert!(!c.is_open());
        assert_eq!(
            c.prompt().notices(),
            vec![Notice::Success("Employee Updated Successfully".to_string())]
        );
    }

    #[tokio::test]
    async fn test_edited_fields_reach_update_and_list() {
        let ben = employee(2, "Ben");
        let mut c = component(FakeService::with_employees(vec![ben.clone()]));
        c.initialize().await;

        c.open_edit(&ben);
        c.form_mut().department = "Sales".to_string();
        c.form_mut().age = Some(60);
        c.submit().await;

        let reloaded = c.find(2).unwrap();
        assert_eq!(reloaded.department, "Sales");
        assert_eq!(reloaded.age, 60);
    }

    #[tokio::test]
    async fn test_create_iff_sentinel_id() {
        for id in [0, 1, 17] {
            let mut c = component(FakeService::with_employees(vec![employee(1, "Ann"), employee(17, "Sam")]));
            c.open_add();
            *c.form_mut() = EmployeeForm { id, ..alice_form() };

            c.submit().await;

            match c.service().writes().as_slice() {
                [Call::Create(e)] => assert_eq!(id, 0, "create used for id {}", e.id),
                [Call::Update(e)] => {
                    assert_ne!(id, 0);
                    assert_eq!(e.id, id);
                }
                other => panic!("unexpected calls {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_invalid_submit_makes_no_call() {
        let mut c = component(FakeService::default());
        c.open_add();
        *c.form_mut() = EmployeeForm {
            name: String::new(),
            email: "bad".to_string(),
            mobile: "123".to_string(),
            age: Some(10),
            ..alice_form()
        };
        let before = c.form().clone();

        let outcome = c.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert!(c.service().calls().is_empty());
        assert!(c.is_open());
        assert_eq!(c.form(), &before);
        assert_eq!(
            c.prompt().notices(),
            vec![Notice::Invalid(vec![
                "Name is required.".to_string(),
                "Invalid email format.".to_string(),
                "Mobile number must be 10 digits.".to_string(),
                "Age must be at least 18.".to_string(),
            ])]
        );
    }

    #[tokio::test]
    async fn test_age_out_of_range_blocks_submit() {
        for age in [0, 17, 61, 99] {
            let mut c = component(FakeService::default());
            c.open_add();
            *c.form_mut() = EmployeeForm {
                age: Some(age),
                ..alice_form()
            };

            let SubmitOutcome::Invalid(errors) = c.submit().await else {
                panic!("age {age} should be rejected");
            };

            assert!(errors.has_field(shared::Field::Age));
            assert!(errors.messages().iter().any(|m| m.starts_with("Age")));
            assert!(c.service().calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_bad_mobile_blocks_submit() {
        for mobile in ["123456789", "12345678901", "12345-6789", "abcdefghij"] {
            let mut c = component(FakeService::default());
            c.open_add();
            *c.form_mut() = EmployeeForm {
                mobile: mobile.to_string(),
                ..alice_form()
            };

            let SubmitOutcome::Invalid(errors) = c.submit().await else {
                panic!("mobile {mobile:?} should be rejected");
            };

            assert_eq!(errors.messages(), vec!["Mobile number must be 10 digits."]);
            assert!(c.service().calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_failed_save_leaves_dialog_open() {
        let mut c = component(FakeService::default().failing_writes());
        c.open_add();
        *c.form_mut() = alice_form();

        let outcome = c.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(ClientError::Status { status: 500, .. })));
        assert!(c.is_open());
        assert_eq!(c.form(), &alice_form());
        // No reload after a failed write
        assert_eq!(c.service().calls().len(), 1);
        assert!(matches!(
            c.prompt().notices().as_slice(),
            [Notice::Failure(msg)] if msg.starts_with("Failed to save employee")
        ));
    }

    #[tokio::test]
    async fn test_delete_confirmed_removes_and_reloads() {
        let ann = employee(1, "Ann");
        let service = FakeService::with_employees(vec![ann.clone(), employee(2, "Ben")]);
        let mut c = EmployeeComponent::new(service, ScriptedPrompt::answering(&[true]));
        c.initialize().await;

        let outcome = c.delete(&ann).await;

        assert!(matches!(outcome, DeleteOutcome::Deleted));
        assert_eq!(
            c.prompt().questions(),
            vec!["Are you sure you want to delete this Employee Ann".to_string()]
        );
        assert_eq!(c.service().writes(), vec![Call::Delete(1)]);
        assert_eq!(c.employees().len(), 1);
        assert!(c.find(1).is_none());
        assert_eq!(
            c.prompt().notices(),
            vec![Notice::Success("Employee Deleted Successfully".to_string())]
        );
    }

    #[tokio::test]
    async fn test_delete_declined_makes_no_call() {
        let ann = employee(1, "Ann");
        let service = FakeService::with_employees(vec![ann.clone()]);
        let mut c = EmployeeComponent::new(service, ScriptedPrompt::answering(&[false]));
        c.initialize().await;

        let outcome = c.delete(&ann).await;

        assert!(matches!(outcome, DeleteOutcome::Cancelled));
        assert_eq!(c.service().calls(), vec![Call::ListAll]);
        assert_eq!(c.employees().len(), 1);
        assert!(c.prompt().notices().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_stale_list() {
        let ann = employee(1, "Ann");
        let service = FakeService::with_employees(vec![ann.clone()]).failing_writes();
        let mut c = EmployeeComponent::new(service, ScriptedPrompt::answering(&[true]));
        c.initialize().await;

        let outcome = c.delete(&ann).await;

        assert!(matches!(outcome, DeleteOutcome::Failed(_)));
        assert_eq!(c.service().calls(), vec![Call::ListAll, Call::Delete(1)]);
        assert_eq!(c.employees(), &[ann]);
    }
}
