//! Directory Operations
//!
//! One method per directory endpoint. Paths mirror the service routes;
//! the collection route keeps its trailing slash because the service
//! treats `/api/users` and `/api/users/` as different routes.

use std::sync::Arc;

use kernel::id::UserId;
use platform::client::ApiClient;
use platform::error::ClientResult;
use platform::transport::Transport;

use crate::dto::{EmployeeFilter, EmployeeUpdate, NewEmployee};
use crate::model::Employee;

/// Typed access to the user-directory service
pub struct DirectoryApi<T>
where
    T: Transport + Send + Sync + 'static,
{
    client: Arc<ApiClient<T>>,
}

impl<T> DirectoryApi<T>
where
    T: Transport + Send + Sync + 'static,
{
    pub fn new(client: Arc<ApiClient<T>>) -> Self {
        Self { client }
    }

    /// Profile of the signed-in employee
    pub async fn me(&self) -> ClientResult<Employee> {
        self.client.get("/api/users/me").await
    }

    /// Update the signed-in employee's own profile
    pub async fn update_me(&self, update: &EmployeeUpdate) -> ClientResult<Employee> {
        self.client.patch("/api/users/me", update).await
    }

    pub async fn employee(&self, id: UserId) -> ClientResult<Employee> {
        self.client.get(&format!("/api/users/{id}")).await
    }

    pub async fn update_employee(
        &self,
        id: UserId,
        update: &EmployeeUpdate,
    ) -> ClientResult<Employee> {
        self.client.patch(&format!("/api/users/{id}"), update).await
    }

    /// Search the directory; unset filter fields are not sent
    pub async fn search(&self, filter: &EmployeeFilter) -> ClientResult<Vec<Employee>> {
        self.client.get_with("/api/users/", filter).await
    }

    /// Register a new employee record
    pub async fn create(&self, employee: &NewEmployee) -> ClientResult<Employee> {
        self.client.post("/api/users/", employee).await
    }

    /// Remove an employee record
    pub async fn remove(&self, id: UserId) -> ClientResult<()> {
        self.client.delete(&format!("/api/users/{id}")).await
    }
}
