#![allow(dead_code)]
//! In-process stand-in for the upstream employee store, served over real HTTP.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use models::{CreateEmployeeInput, Employee, Envelope};
use tokio::net::TcpListener;

const OK_STATUS: &str = "Successfully processed request.";

#[derive(Clone, Default)]
pub struct MockStore {
    pub rows: Arc<Mutex<Vec<Employee>>>,
    pub hits: Arc<Mutex<Vec<String>>>,
    pub fail_with: Arc<Mutex<Option<StatusCode>>>,
    pub ok_body: Arc<Mutex<Option<&'static str>>>,
}

impl MockStore {
    pub fn with(rows: Vec<Employee>) -> Self {
        Self { rows: Arc::new(Mutex::new(rows)), ..Self::default() }
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    pub fn fail_with(&self, status: StatusCode) {
        *self.fail_with.lock().unwrap() = Some(status);
    }

    /// Answer every call with `200 OK` and this raw body instead of a real envelope.
    pub fn answer_ok_with(&self, body: &'static str) {
        *self.ok_body.lock().unwrap() = Some(body);
    }

    fn hit(&self, what: String) -> Option<Response> {
        self.hits.lock().unwrap().push(what);
        if let Some(status) = *self.fail_with.lock().unwrap() {
            return Some((status, "mock failure").into_response());
        }
        (*self.ok_body.lock().unwrap()).map(|body| {
            (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        })
    }
}

pub fn employee(id: &str, name: &str, salary: i64) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        salary,
        age: 40,
        title: "Analyst".to_string(),
        email: Some(format!("{}@company.com", name.to_lowercase().replace(' ', "."))),
    }
}

async fn list(State(store): State<MockStore>) -> Response {
    if let Some(fail) = store.hit("GET /".into()) {
        return fail;
    }
    let rows = store.rows.lock().unwrap().clone();
    Json(Envelope::new(rows, OK_STATUS)).into_response()
}

async fn one(State(store): State<MockStore>, Path(id): Path<String>) -> Response {
    if let Some(fail) = store.hit(format!("GET /{id}")) {
        return fail;
    }
    let found = store.rows.lock().unwrap().iter().find(|e| e.id == id).cloned();
    match found {
        Some(e) => Json(Envelope::new(e, OK_STATUS)).into_response(),
        None => {
            let body = Json(Envelope::<Employee>::empty("Not Found"));
            (StatusCode::NOT_FOUND, body).into_response()
        }
    }
}

async fn create(
    State(store): State<MockStore>,
    Json(input): Json<CreateEmployeeInput>,
) -> Response {
    if let Some(fail) = store.hit(format!("POST {}", input.name)) {
        return fail;
    }
    let mut rows = store.rows.lock().unwrap();
    let created = Employee {
        id: format!("generated-{}", rows.len() + 1),
        name: input.name.clone(),
        salary: input.salary.unwrap_or_default(),
        age: input.age.unwrap_or_default(),
        title: input.title.clone(),
        email: Some("new@company.com".into()),
    };
    rows.push(created.clone());
    Json(Envelope::new(created, OK_STATUS)).into_response()
}

async fn delete(State(store): State<MockStore>, Json(body): Json<serde_json::Value>) -> Response {
    let name = body["name"].as_str().unwrap_or_default().to_string();
    if let Some(fail) = store.hit(format!("DELETE {name}")) {
        return fail;
    }
    let mut rows = store.rows.lock().unwrap();
    let before = rows.len();
    rows.retain(|e| e.name != name);
    Json(Envelope::new(rows.len() < before, OK_STATUS)).into_response()
}

/// Serve the mock on an ephemeral port; returns the collection URL.
pub async fn spawn_mock_upstream(store: MockStore) -> anyhow::Result<String> {
    let app = Router::new()
        .route("/api/v1/employee", get(list).post(create).delete(delete))
        .route("/api/v1/employee/:id", get(one))
        .with_state(store);
    let base = serve(app).await?;
    Ok(format!("{base}/api/v1/employee"))
}

pub async fn serve(app: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("mock server error: {e}");
        }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}
