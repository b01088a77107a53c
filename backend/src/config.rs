//! Gateway configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_BASE_URL: &str = "https://dummy.restapiexample.com/api/v1";
const DEFAULT_EMPLOYEES_RESOURCE: &str = "/employees";
const DEFAULT_EMPLOYEE_RESOURCE: &str = "/employee/";
const DEFAULT_CREATE_RESOURCE: &str = "/create";
const DEFAULT_DELETE_RESOURCE: &str = "/delete/";

/// Configuration values for the HTTP listener and the upstream directory.
///
/// Resource templates are appended verbatim to `base_url`; item and delete
/// templates receive the employee id as a trailing path segment.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEE_GATEWAY")]
pub struct GatewaySettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the upstream employee directory.
    pub base_url: Option<String>,
    /// Resource listing every employee.
    pub employees_resource: Option<String>,
    /// Resource prefix for single-employee lookups.
    pub employee_resource: Option<String>,
    /// Resource accepting creation requests.
    pub create_resource: Option<String>,
    /// Resource prefix for deletions.
    pub delete_resource: Option<String>,
    /// Upstream request timeout in seconds.
    #[ortho_config(default = 10)]
    pub timeout_secs: u64,
}

impl GatewaySettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured upstream base URL, falling back to the default.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Return the list resource template.
    pub fn employees_resource(&self) -> &str {
        self.employees_resource
            .as_deref()
            .unwrap_or(DEFAULT_EMPLOYEES_RESOURCE)
    }

    /// Return the single-employee resource template.
    pub fn employee_resource(&self) -> &str {
        self.employee_resource
            .as_deref()
            .unwrap_or(DEFAULT_EMPLOYEE_RESOURCE)
    }

    /// Return the creation resource template.
    pub fn create_resource(&self) -> &str {
        self.create_resource
            .as_deref()
            .unwrap_or(DEFAULT_CREATE_RESOURCE)
    }

    /// Return the deletion resource template.
    pub fn delete_resource(&self) -> &str {
        self.delete_resource
            .as_deref()
            .unwrap_or(DEFAULT_DELETE_RESOURCE)
    }

    /// Return the upstream request timeout; zero is raised to one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
