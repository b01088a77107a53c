//! Employee directory outbound adapter.
//!
//! This module provides a thin HTTP implementation of the
//! `EmployeeDirectory` port.

mod dto;
mod endpoints;
mod http_source;

pub use endpoints::{EmployeeApiEndpoints, EndpointError};
pub use http_source::EmployeeApiHttpSource;
