use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::{EmployeeService, EmployeeUpstream};

use crate::openapi::ApiDoc;

pub mod employees;

/// Mount point of the employee surface.
pub const EMPLOYEE_BASE_PATH: &str = "/api/v1/employee";

#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
}

impl AppState {
    pub fn new(upstream: Arc<dyn EmployeeUpstream>) -> Self {
        Self { employees: EmployeeService::new(upstream) }
    }
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "OK", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn metrics() -> Response {
    match service::observability::encode_metrics() {
        Ok(text) => (StatusCode::OK, text).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, metrics, docs and the employee API.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest(EMPLOYEE_BASE_PATH, employees::router())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
