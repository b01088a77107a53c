//! HTTP inbound adapter exposing REST endpoints.

pub mod employees;
pub mod error;
pub mod health;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

use crate::domain::Error;
use employees::{
    create_employee, delete_employee, get_employee, highest_salary, list_employees,
    search_employees, top_ten_earners,
};

/// JSON extractor configuration reporting malformed bodies as
/// `invalid_request` through the shared error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|error, _req| {
        Error::invalid_request(format!("invalid request body: {error}")).into()
    })
}

/// Register the `/api/v1` employee endpoints.
///
/// Literal `/employee/...` routes are registered ahead of `/employee/{id}`
/// so that the identifier pattern does not capture them.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use employee_gateway::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config())
            .service(highest_salary)
            .service(top_ten_earners)
            .service(search_employees)
            .service(list_employees)
            .service(create_employee)
            .service(get_employee)
            .service(delete_employee),
    );
}
