//! Driving port for employee mutations.

use async_trait::async_trait;

use crate::domain::{Employee, Error};

/// Raw creation input as received from a client.
///
/// Values are unvalidated; the command implementation rejects blank names
/// and non-positive numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmployeeRequest {
    /// Employee name.
    pub name: String,
    /// Salary; must be positive.
    pub salary: i64,
    /// Age; must be positive.
    pub age: i64,
}

/// Write-side employee use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeesCommand: Send + Sync {
    /// Create an employee and return the stored record.
    async fn create(&self, request: CreateEmployeeRequest) -> Result<Employee, Error>;

    /// Delete an employee by raw identifier.
    async fn delete(&self, id: &str) -> Result<(), Error>;
}
