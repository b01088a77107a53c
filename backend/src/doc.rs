//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the gateway. It registers:
//!
//! - **Paths**: every employee endpoint and the health probes
//! - **Schemas**: the employee response, creation body and error envelope
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::employees::{CreateEmployeeBody, EmployeeResponse};
use crate::inbound::http::error::ErrorBody;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee gateway API",
        description = "REST facade over the upstream employee directory, with aggregate queries and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::search_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::highest_salary,
        crate::inbound::http::employees::top_ten_earners,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(EmployeeResponse, CreateEmployeeBody, ErrorBody)),
    tags(
        (name = "employees", description = "Employee directory operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("EmployeeResponse", &["id", "employee_name", "employee_salary", "employee_age", "profile_image"])]
    #[case("CreateEmployeeBody", &["name", "salary", "age"])]
    #[case("ErrorBody", &["error"])]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    #[case("/api/v1/employee")]
    #[case("/api/v1/employee/search/{searchString}")]
    #[case("/api/v1/employee/{id}")]
    #[case("/api/v1/employee/highestSalary")]
    #[case("/api/v1/employee/topTenHighestEarningEmployeeNames")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn paths_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "{path} missing");
    }
}
