//! Employee data access layer
//!
//! | Operation      | Verb   | Path         |
//! |----------------|--------|--------------|
//! | `list_all`     | GET    | `{base}`     |
//! | `create`       | POST   | `{base}`     |
//! | `update`       | PUT    | `{base}/{id}`|
//! | `delete_by_id` | DELETE | `{base}/{id}`|

use async_trait::async_trait;
use shared::Employee;

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};

/// Employee CRUD operations
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Fetch every employee
    async fn list_all(&self) -> ClientResult<Vec<Employee>>;

    /// Create an employee; the record is sent as-is, including `id = 0`
    async fn create(&self, employee: &Employee) -> ClientResult<Employee>;

    /// Replace the employee identified by `employee.id`
    async fn update(&self, employee: &Employee) -> ClientResult<Employee>;

    async fn delete_by_id(&self, id: i64) -> ClientResult<()>;
}

/// [`EmployeeService`] over an HTTP transport
#[derive(Debug, Clone)]
pub struct EmployeeApi<H = NetworkHttpClient> {
    http: H,
}

impl EmployeeApi<NetworkHttpClient> {
    /// Build a network-backed service from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?))
    }
}

impl<H: HttpClient> EmployeeApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// Resource URL this service talks to
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

#[async_trait]
impl<H: HttpClient> EmployeeService for EmployeeApi<H> {
    async fn list_all(&self) -> ClientResult<Vec<Employee>> {
        self.http.get("").await
    }

    async fn create(&self, employee: &Employee) -> ClientResult<Employee> {
        self.http.post("", employee).await
    }

    async fn update(&self, employee: &Employee) -> ClientResult<Employee> {
        self.http.put(&employee.id.to_string(), employee).await
    }

    async fn delete_by_id(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&id.to_string()).await
    }
}
