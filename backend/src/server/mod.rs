//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use employee_gateway::Trace;
#[cfg(debug_assertions)]
use employee_gateway::doc::ApiDoc;
use employee_gateway::domain::EmployeeService;
use employee_gateway::inbound::http::configure;
use employee_gateway::inbound::http::health::{HealthState, live, ready};
use employee_gateway::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = Arc::new(EmployeeService::new(config.directory.clone()));
    web::Data::new(HttpState::new(service.clone(), service))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "employee gateway listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use actix_web::http::StatusCode;
    use actix_web::test;
    use employee_gateway::domain::TRACE_ID_HEADER;
    use employee_gateway::outbound::employee_api::{EmployeeApiEndpoints, EmployeeApiHttpSource};

    fn deps() -> AppDependencies {
        let endpoints = EmployeeApiEndpoints::new(
            "http://127.0.0.1:9",
            "/employees",
            "/employee/",
            "/create",
            "/delete/",
        )
        .expect("valid endpoints");
        let source =
            EmployeeApiHttpSource::new(endpoints, Duration::from_secs(1)).expect("client builds");
        let config = ServerConfig::new(
            "127.0.0.1:0".parse().expect("socket address"),
            Arc::new(source),
        );
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        AppDependencies {
            health_state,
            http_state: build_http_state(&config),
        }
    }

    #[actix_web::test]
    async fn app_serves_probes_with_trace_header() {
        let app = test::init_service(build_app(deps())).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
    }

    #[actix_web::test]
    async fn blank_search_is_rejected_before_upstream_call() {
        let app = test::init_service(build_app(deps())).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/employee/search/%20")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
