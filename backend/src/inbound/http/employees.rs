//! Employee API handlers.
//!
//! ```text
//! GET    /api/v1/employee
//! GET    /api/v1/employee/search/{searchString}
//! GET    /api/v1/employee/{id}
//! GET    /api/v1/employee/highestSalary
//! GET    /api/v1/employee/topTenHighestEarningEmployeeNames
//! POST   /api/v1/employee {"name":"Raj","salary":70000,"age":30}
//! DELETE /api/v1/employee/{id}
//! ```
//!
//! Literal paths must be registered before `/employee/{id}`; see
//! [`crate::inbound::http::configure`].

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::Employee;
use crate::domain::ports::CreateEmployeeRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Employee representation returned to clients.
///
/// Field names follow the upstream directory so payloads can be relayed
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    /// Upstream identifier, always rendered as a string.
    #[schema(example = "7")]
    pub id: String,
    #[schema(example = "Raj")]
    pub employee_name: String,
    #[schema(example = 70000)]
    pub employee_salary: u64,
    #[schema(example = 30)]
    pub employee_age: u32,
    /// Profile image reference; `null` when the directory has none.
    pub profile_image: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id().to_string(),
            employee_name: employee.name().to_owned(),
            employee_salary: employee.salary(),
            employee_age: employee.age(),
            profile_image: employee.profile_image().map(str::to_owned),
        }
    }
}

/// Creation request body for `POST /api/v1/employee`.
///
/// Example JSON: `{"name":"Raj","salary":70000,"age":30}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEmployeeBody {
    #[schema(example = "Raj")]
    pub name: String,
    #[schema(example = 70000)]
    pub salary: i64,
    #[schema(example = 30)]
    pub age: i64,
}

impl From<CreateEmployeeBody> for CreateEmployeeRequest {
    fn from(body: CreateEmployeeBody) -> Self {
        Self {
            name: body.name,
            salary: body.salary,
            age: body.age,
        }
    }
}

fn to_responses(employees: Vec<Employee>) -> Vec<EmployeeResponse> {
    employees.into_iter().map(EmployeeResponse::from).collect()
}

/// List every employee in upstream order.
#[utoipa::path(
    get,
    path = "/api/v1/employee",
    responses(
        (status = 200, description = "All employees", body = [EmployeeResponse]),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employee")]
pub async fn list_employees(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<EmployeeResponse>>> {
    info!("list employees requested");
    let employees = state.employees.list_all().await?;
    Ok(web::Json(to_responses(employees)))
}

/// Employees whose name contains the search string, ignoring case.
#[utoipa::path(
    get,
    path = "/api/v1/employee/search/{searchString}",
    params(("searchString" = String, Path, description = "Name fragment")),
    responses(
        (status = 200, description = "Matching employees", body = [EmployeeResponse]),
        (status = 400, description = "Blank search string", body = ErrorBody),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "searchEmployeesByName"
)]
#[get("/employee/search/{searchString}")]
pub async fn search_employees(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<EmployeeResponse>>> {
    let fragment = path.into_inner();
    info!(fragment = %fragment, "employee search requested");
    let employees = state.employees.search_by_name(&fragment).await?;
    Ok(web::Json(to_responses(employees)))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/api/v1/employee/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee", body = EmployeeResponse),
        (status = 400, description = "Blank identifier", body = ErrorBody),
        (status = 404, description = "Unknown employee", body = ErrorBody),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "getEmployeeById"
)]
#[get("/employee/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EmployeeResponse>> {
    let id = path.into_inner();
    info!(id = %id, "employee lookup requested");
    let employee = state.employees.get_by_id(&id).await?;
    Ok(web::Json(employee.into()))
}

/// Highest salary across all employees.
#[utoipa::path(
    get,
    path = "/api/v1/employee/highestSalary",
    responses(
        (status = 200, description = "Highest salary", body = u64),
        (status = 500, description = "Upstream failure or no employees", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "getHighestSalaryOfEmployees"
)]
#[get("/employee/highestSalary")]
pub async fn highest_salary(state: web::Data<HttpState>) -> ApiResult<web::Json<u64>> {
    info!("highest salary requested");
    let salary = state.employees.highest_salary().await?;
    Ok(web::Json(salary))
}

/// Names of the ten highest earners, highest first.
#[utoipa::path(
    get,
    path = "/api/v1/employee/topTenHighestEarningEmployeeNames",
    responses(
        (status = 200, description = "Employee names", body = [String]),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "getTopTenHighestEarningEmployeeNames"
)]
#[get("/employee/topTenHighestEarningEmployeeNames")]
pub async fn top_ten_earners(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<String>>> {
    info!("top earners requested");
    let names = state.employees.top_ten_by_earning().await?;
    Ok(web::Json(names))
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/api/v1/employee",
    request_body = CreateEmployeeBody,
    responses(
        (status = 201, description = "Created employee", body = EmployeeResponse),
        (status = 400, description = "Invalid input or rejected by directory", body = ErrorBody),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employee")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<CreateEmployeeBody>,
) -> ApiResult<HttpResponse> {
    let request = CreateEmployeeRequest::from(payload.into_inner());
    info!(name = %request.name, "employee creation requested");
    let employee = state.employees_command.create(request).await?;
    Ok(HttpResponse::Created().json(EmployeeResponse::from(employee)))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/api/v1/employee/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Blank identifier", body = ErrorBody),
        (status = 404, description = "Unknown employee", body = ErrorBody),
        (status = 500, description = "Deletion failed", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployeeById"
)]
#[delete("/employee/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    info!(id = %id, "employee deletion requested");
    state.employees_command.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
