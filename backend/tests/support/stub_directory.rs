//! Stub upstream employee directory served by a real Actix listener.
//!
//! Each route is keyed by method and path and answers with a canned status
//! and JSON body. Unknown routes answer 404. Every request is recorded so
//! tests can assert on the exchanges the gateway performed.

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use employee_gateway::outbound::employee_api::EmployeeApiEndpoints;
use serde_json::Value;

/// Path prefix the stub serves under, mirroring the public dummy API.
pub const API_PREFIX: &str = "/api/v1";

/// One request received by the stub.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct CannedResponse {
    status: u16,
    body: Value,
}

struct StubState {
    routes: HashMap<(String, String), CannedResponse>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Builder for a stub directory.
#[derive(Default)]
pub struct StubDirectory {
    routes: HashMap<(String, String), CannedResponse>,
}

impl StubDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` (relative to [`API_PREFIX`]) with `status` and `body`.
    pub fn route(mut self, method: &str, path: &str, status: u16, body: Value) -> Self {
        self.routes.insert(
            (method.to_uppercase(), format!("{API_PREFIX}{path}")),
            CannedResponse { status, body },
        );
        self
    }

    /// Bind to an ephemeral port and start serving.
    pub async fn spawn(self) -> Result<RunningStub, String> {
        let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
        let addr = listener.local_addr().map_err(|err| err.to_string())?;
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = web::Data::new(StubState {
            routes: self.routes,
            requests: requests.clone(),
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .default_service(web::to(respond))
        })
        .disable_signals()
        .workers(1)
        .listen(listener)
        .map_err(|err| err.to_string())?
        .run();

        let handle = server.handle();
        actix_web::rt::spawn(server);

        Ok(RunningStub {
            base_url: format!("http://{addr}{API_PREFIX}"),
            handle,
            requests,
        })
    }
}

async fn respond(req: HttpRequest, body: web::Bytes, state: web::Data<StubState>) -> HttpResponse {
    let method = req.method().as_str().to_owned();
    let path = req.path().to_owned();
    let parsed_body = serde_json::from_slice::<Value>(&body).ok();
    state
        .requests
        .lock()
        .expect("request log lock")
        .push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
            body: parsed_body,
        });

    match state.routes.get(&(method, path)) {
        Some(canned) => {
            let status = StatusCode::from_u16(canned.status).expect("valid status");
            HttpResponse::build(status).json(&canned.body)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "status": "error" })),
    }
}

/// Handle to a running stub directory.
pub struct RunningStub {
    pub base_url: String,
    handle: ServerHandle,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl RunningStub {
    /// Endpoints using the default resource templates against this stub.
    pub fn endpoints(&self) -> EmployeeApiEndpoints {
        EmployeeApiEndpoints::new(
            &self.base_url,
            "/employees",
            "/employee/",
            "/create",
            "/delete/",
        )
        .expect("stub endpoints are valid")
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log lock").clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

/// Endpoints pointing at a local port with nothing listening.
pub fn unreachable_endpoints() -> EmployeeApiEndpoints {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    EmployeeApiEndpoints::new(
        &format!("http://{addr}{API_PREFIX}"),
        "/employees",
        "/employee/",
        "/create",
        "/delete/",
    )
    .expect("endpoints are valid")
}
