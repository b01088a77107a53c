//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use employee_gateway::config::GatewaySettings;
use employee_gateway::outbound::employee_api::{EmployeeApiEndpoints, EmployeeApiHttpSource};

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) directory: Arc<EmployeeApiHttpSource>,
}

impl ServerConfig {
    /// Construct a server configuration from an already-built directory
    /// adapter.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, directory: Arc<EmployeeApiHttpSource>) -> Self {
        Self {
            bind_addr,
            directory,
        }
    }

    /// Resolve the bind address and upstream adapter from gateway settings.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the bind address or an upstream URL is
    /// invalid, or the HTTP client cannot be constructed.
    pub fn from_settings(settings: &GatewaySettings) -> std::io::Result<Self> {
        let bind_addr: SocketAddr = settings.bind_addr().parse().map_err(|e| {
            std::io::Error::other(format!(
                "invalid bind address {:?}: {e}",
                settings.bind_addr()
            ))
        })?;
        let endpoints = EmployeeApiEndpoints::from_settings(settings)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        let directory = EmployeeApiHttpSource::new(endpoints, settings.timeout())
            .map_err(|e| std::io::Error::other(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::new(bind_addr, Arc::new(directory)))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
