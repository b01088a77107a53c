//! Driven port for the upstream employee directory.
//!
//! The directory is a third-party HTTP API. The domain owns the request and
//! response shapes so the service layer stays adapter-agnostic; adapters map
//! every transport outcome into [`EmployeeDirectoryError`].

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Employee, EmployeeId, NewEmployee};

/// Successful list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeCollection {
    /// Upstream status indicator, e.g. `success`.
    pub status: String,
    /// Records in upstream order.
    pub employees: Vec<Employee>,
}

/// Successful single-record fetch or creation.
///
/// Absence is reported as [`EmployeeDirectoryError::NotFound`] rather than an
/// empty record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeItem {
    /// Upstream status indicator.
    pub status: String,
    /// The fetched or created record.
    pub employee: Employee,
}

define_port_error! {
    /// Errors surfaced while calling the employee directory.
    pub enum EmployeeDirectoryError {
        /// Directory reported that the requested employee does not exist.
        NotFound { id: String } =>
            "employee not found with id: {id}",
        /// Directory refused to create the employee.
        Creation { message: String } =>
            "failed to create employee: {message}",
        /// Directory failed to delete the employee.
        Deletion { message: String } =>
            "failed to delete employee: {message}",
        /// Directory answered with a status the operation does not accept.
        Status { status: u16, message: String } =>
            "employee directory returned status {status}: {message}",
        /// Network transport failed before a response was received.
        Transport { message: String } =>
            "employee directory transport failed: {message}",
        /// Response body could not be decoded.
        Decode { message: String } =>
            "employee directory response decode failed: {message}",
    }
}

impl EmployeeDirectoryError {
    /// Whether this is a generic integration failure rather than one with a
    /// precise domain meaning.
    pub fn is_integration(&self) -> bool {
        matches!(
            self,
            Self::Status { .. } | Self::Transport { .. } | Self::Decode { .. }
        )
    }
}

/// Port for reading and mutating employees held by the upstream directory.
///
/// Each method performs exactly one upstream exchange.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Fetch every employee.
    async fn fetch_all(&self) -> Result<EmployeeCollection, EmployeeDirectoryError>;

    /// Fetch one employee by id.
    async fn fetch_by_id(&self, id: &EmployeeId) -> Result<EmployeeItem, EmployeeDirectoryError>;

    /// Create an employee and return the record the directory stored.
    async fn create(&self, employee: &NewEmployee) -> Result<EmployeeItem, EmployeeDirectoryError>;

    /// Delete an employee by id.
    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeDirectoryError>;
}
