//! Resolved upstream URLs for the employee directory.

use thiserror::Error;
use url::Url;

use crate::config::GatewaySettings;
use crate::domain::EmployeeId;

/// Failure to derive a usable upstream URL from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    /// The joined URL does not parse.
    #[error("invalid employee directory url {url:?}: {message}")]
    InvalidUrl { url: String, message: String },
    /// Only `http` and `https` are supported.
    #[error("unsupported scheme in employee directory url {url:?}")]
    UnsupportedScheme { url: String },
}

/// Upstream endpoints, parsed once at start-up.
///
/// # Examples
/// ```
/// use employee_gateway::domain::EmployeeId;
/// use employee_gateway::outbound::employee_api::EmployeeApiEndpoints;
///
/// let endpoints = EmployeeApiEndpoints::new(
///     "http://localhost:3000/api/v1",
///     "/employees",
///     "/employee/",
///     "/create",
///     "/delete/",
/// )
/// .expect("valid endpoints");
/// let id = EmployeeId::new("7").expect("valid id");
/// assert_eq!(
///     endpoints.item_url(&id).as_str(),
///     "http://localhost:3000/api/v1/employee/7"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeApiEndpoints {
    list: Url,
    item: Url,
    create: Url,
    delete: Url,
}

impl EmployeeApiEndpoints {
    /// Join `base_url` with each resource template.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError`] when a joined URL does not parse or uses a
    /// scheme other than `http`/`https`.
    pub fn new(
        base_url: &str,
        employees_resource: &str,
        employee_resource: &str,
        create_resource: &str,
        delete_resource: &str,
    ) -> Result<Self, EndpointError> {
        Ok(Self {
            list: join(base_url, employees_resource)?,
            item: join(base_url, employee_resource)?,
            create: join(base_url, create_resource)?,
            delete: join(base_url, delete_resource)?,
        })
    }

    /// Resolve endpoints from gateway settings.
    ///
    /// # Errors
    ///
    /// See [`EmployeeApiEndpoints::new`].
    pub fn from_settings(settings: &GatewaySettings) -> Result<Self, EndpointError> {
        Self::new(
            settings.base_url(),
            settings.employees_resource(),
            settings.employee_resource(),
            settings.create_resource(),
            settings.delete_resource(),
        )
    }

    /// Resource listing every employee.
    #[must_use]
    pub fn list_url(&self) -> &Url {
        &self.list
    }

    /// Resource accepting creation requests.
    #[must_use]
    pub fn create_url(&self) -> &Url {
        &self.create
    }

    /// Single-employee resource for `id`.
    #[must_use]
    pub fn item_url(&self, id: &EmployeeId) -> Url {
        with_id_segment(&self.item, id)
    }

    /// Deletion resource for `id`.
    #[must_use]
    pub fn delete_url(&self, id: &EmployeeId) -> Url {
        with_id_segment(&self.delete, id)
    }
}

fn join(base_url: &str, resource: &str) -> Result<Url, EndpointError> {
    let raw = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        resource.trim_start_matches('/')
    );
    let url = Url::parse(&raw).map_err(|error| EndpointError::InvalidUrl {
        url: raw.clone(),
        message: error.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(EndpointError::UnsupportedScheme { url: raw });
    }
    Ok(url)
}

// http(s) URLs always have path segments; `new` rejects every other scheme.
fn with_id_segment(template: &Url, id: &EmployeeId) -> Url {
    let mut url = template.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(id.as_str());
    }
    url
}
