//! Employee domain service.
//!
//! Implements the driving ports on top of the [`EmployeeDirectory`] driven
//! port. Every operation performs exactly one directory call; search, highest
//! salary and top earners aggregate the fetched collection in memory.
//!
//! Failure translation: not-found, creation and deletion failures keep their
//! kind; integration failures (unexpected status, transport, decode) become
//! an internal error carrying an operation-specific message.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    CreateEmployeeRequest, EmployeeDirectory, EmployeeDirectoryError, EmployeesCommand,
    EmployeesQuery,
};
use crate::domain::{Employee, EmployeeId, EmployeeValidationError, Error, NewEmployee};

/// Number of names returned by the top earners operation.
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Employee service implementing [`EmployeesQuery`] and [`EmployeesCommand`].
#[derive(Clone)]
pub struct EmployeeService<D> {
    directory: Arc<D>,
}

impl<D> EmployeeService<D> {
    /// Create a service backed by the given directory.
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

impl<D> EmployeeService<D>
where
    D: EmployeeDirectory,
{
    fn map_directory_error(error: EmployeeDirectoryError, context: &'static str) -> Error {
        if error.is_integration() {
            warn!(%error, context, "employee directory integration failure");
            return Error::internal(context);
        }
        match error {
            EmployeeDirectoryError::NotFound { .. } => Error::not_found(error.to_string()),
            EmployeeDirectoryError::Creation { .. } => Error::creation_failed(error.to_string()),
            EmployeeDirectoryError::Deletion { .. } => Error::deletion_failed(error.to_string()),
            _ => Error::internal(context),
        }
    }

    fn map_validation_error(error: EmployeeValidationError) -> Error {
        Error::invalid_request(error.to_string())
    }

    fn parse_id(raw: &str) -> Result<EmployeeId, Error> {
        EmployeeId::new(raw).map_err(Self::map_validation_error)
    }

    async fn fetch_employees(&self, context: &'static str) -> Result<Vec<Employee>, Error> {
        let collection = self
            .directory
            .fetch_all()
            .await
            .map_err(|error| Self::map_directory_error(error, context))?;
        Ok(collection.employees)
    }
}

/// Employees whose name contains `fragment`, ignoring case, in input order.
pub fn filter_by_name(employees: Vec<Employee>, fragment: &str) -> Vec<Employee> {
    let needle = fragment.to_lowercase();
    employees
        .into_iter()
        .filter(|employee| employee.name_contains_lowercase(&needle))
        .collect()
}

/// Highest salary, or `None` for an empty collection.
pub fn max_salary(employees: &[Employee]) -> Option<u64> {
    employees.iter().map(Employee::salary).max()
}

/// Names of at most `limit` employees ordered by descending salary.
///
/// `sort_by` is stable, so employees with equal salaries keep their input
/// order.
pub fn top_earner_names(mut employees: Vec<Employee>, limit: usize) -> Vec<String> {
    employees.sort_by(|left, right| right.salary().cmp(&left.salary()));
    employees
        .into_iter()
        .take(limit)
        .map(|employee| employee.name().to_owned())
        .collect()
}

#[async_trait]
impl<D> EmployeesQuery for EmployeeService<D>
where
    D: EmployeeDirectory,
{
    async fn list_all(&self) -> Result<Vec<Employee>, Error> {
        info!("loading all employees");
        let employees = self.fetch_employees("error fetching all employees").await?;
        info!(count = employees.len(), "loaded all employees");
        Ok(employees)
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Employee>, Error> {
        info!(fragment, "searching employees by name");
        if fragment.trim().is_empty() {
            return Err(Error::invalid_request("search name must not be empty"));
        }
        let employees = self
            .fetch_employees("error searching for employees by name")
            .await?;
        let matches = filter_by_name(employees, fragment);
        info!(fragment, count = matches.len(), "employee search complete");
        Ok(matches)
    }

    async fn get_by_id(&self, id: &str) -> Result<Employee, Error> {
        info!(id, "loading employee by id");
        let id = Self::parse_id(id)?;
        let item = self.directory.fetch_by_id(&id).await.map_err(|error| {
            Self::map_directory_error(error, "error fetching employee by id")
        })?;
        Ok(item.employee)
    }

    async fn highest_salary(&self) -> Result<u64, Error> {
        info!("computing highest salary");
        let employees = self
            .fetch_employees("error fetching highest salary of employees")
            .await?;
        max_salary(&employees)
            .ok_or_else(|| Error::internal("no employees found to determine highest salary"))
    }

    async fn top_ten_by_earning(&self) -> Result<Vec<String>, Error> {
        info!("computing top earning employees");
        let employees = self
            .fetch_employees("error fetching top ten highest earning employee names")
            .await?;
        Ok(top_earner_names(employees, TOP_EARNERS_LIMIT))
    }
}

#[async_trait]
impl<D> EmployeesCommand for EmployeeService<D>
where
    D: EmployeeDirectory,
{
    async fn create(&self, request: CreateEmployeeRequest) -> Result<Employee, Error> {
        info!(name = %request.name, "creating employee");
        let new_employee = NewEmployee::try_new(request.name, request.salary, request.age)
            .map_err(Self::map_validation_error)?;
        let item = self
            .directory
            .create(&new_employee)
            .await
            .map_err(|error| Self::map_directory_error(error, "error creating employee"))?;
        info!(id = %item.employee.id(), "created employee");
        Ok(item.employee)
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        info!(id, "deleting employee");
        let id = Self::parse_id(id)?;
        self.directory
            .delete(&id)
            .await
            .map_err(|error| Self::map_directory_error(error, "error deleting employee"))?;
        info!(%id, "deleted employee");
        Ok(())
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
