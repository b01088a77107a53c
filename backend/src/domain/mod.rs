//! Domain primitives, ports and services.
//!
//! Purpose: define the employee entities and the use-cases exposed to the
//! HTTP layer, independent of the upstream directory's wire format.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — failure returned by every use-case.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - Employee, EmployeeId, NewEmployee — records and validated inputs.
//! - EmployeeService — implements the driving ports over the directory.
//! - TraceId — per-request correlation identifier.

pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::employee::{Employee, EmployeeId, EmployeeValidationError, NewEmployee};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use employee_gateway::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u64> {
///     Err(Error::not_found("employee not found with id: 7"))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
