//! Driving port for employee read operations.
//!
//! HTTP handlers depend on this trait only, so they can be exercised with a
//! mock while the production binary backs it with `EmployeeService`.

use async_trait::async_trait;

use crate::domain::{Employee, Error};

/// Read-side employee use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeesQuery: Send + Sync {
    /// Every employee in upstream order.
    async fn list_all(&self) -> Result<Vec<Employee>, Error>;

    /// Employees whose name contains `fragment`, ignoring case.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Employee>, Error>;

    /// One employee by raw identifier.
    async fn get_by_id(&self, id: &str) -> Result<Employee, Error>;

    /// Highest salary across all employees.
    async fn highest_salary(&self) -> Result<u64, Error>;

    /// Names of the ten best-paid employees, best paid first.
    async fn top_ten_by_earning(&self) -> Result<Vec<String>, Error>;
}
