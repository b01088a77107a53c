//! Domain-level error type.
//!
//! Errors are transport agnostic: the inbound HTTP adapter maps [`ErrorCode`]
//! to a status code and renders the message, while the domain only decides
//! which kind of failure occurred.

use std::fmt;

use super::TraceId;

/// Failure category reported by the employee operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Input was missing or malformed; detected before any upstream call.
    InvalidRequest,
    /// The upstream directory has no employee with the requested id.
    NotFound,
    /// The upstream directory rejected a creation request.
    CreationFailed,
    /// The upstream directory failed to delete an employee.
    DeletionFailed,
    /// The upstream directory answered unexpectedly or could not be reached.
    ///
    /// Reserved: the employee service reports these as [`Self::InternalError`]
    /// with an operation-specific message.
    IntegrationFailed,
    /// Catch-all for failures with no more specific meaning.
    InternalError,
}

impl ErrorCode {
    /// Stable snake-case name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::NotFound => "not_found",
            Self::CreationFailed => "creation_failed",
            Self::DeletionFailed => "deletion_failed",
            Self::IntegrationFailed => "integration_failed",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the employee operations.
///
/// The trace identifier of the request in scope is captured on construction.
///
/// # Examples
/// ```
/// use employee_gateway::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("employee not found with id: 7");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "employee not found with id: 7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create an error with the given code and client-facing message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Failure category.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured when the error was raised.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Replace the captured trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::CreationFailed`].
    pub fn creation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CreationFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::DeletionFailed`].
    pub fn deletion_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DeletionFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::IntegrationFailed`].
    ///
    /// Reserved for adapters that surface upstream failures directly.
    pub fn integration_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IntegrationFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
