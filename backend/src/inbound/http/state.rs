//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EmployeesCommand, EmployeesQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeesQuery>,
    pub employees_command: Arc<dyn EmployeesCommand>,
}

impl HttpState {
    /// Construct state from the read and write employee ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use employee_gateway::domain::EmployeeService;
    /// use employee_gateway::inbound::http::state::HttpState;
    /// use employee_gateway::outbound::employee_api::{
    ///     EmployeeApiEndpoints, EmployeeApiHttpSource,
    /// };
    ///
    /// let endpoints = EmployeeApiEndpoints::new(
    ///     "http://localhost:3000", "/employees", "/employee/", "/create", "/delete/",
    /// )
    /// .expect("valid endpoints");
    /// let source = EmployeeApiHttpSource::new(endpoints, std::time::Duration::from_secs(1))
    ///     .expect("client builds");
    /// let service = Arc::new(EmployeeService::new(Arc::new(source)));
    /// let state = HttpState::new(service.clone(), service);
    /// let _ = state.employees.clone();
    /// ```
    pub fn new(
        employees: Arc<dyn EmployeesQuery>,
        employees_command: Arc<dyn EmployeesCommand>,
    ) -> Self {
        Self {
            employees,
            employees_command,
        }
    }
}
