//! Employee handlers. No decisions here beyond mapping service outcomes to
//! status codes; everything else lives in `service::EmployeeService`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use models::CreateEmployeeInput;
use service::errors::ServiceError;
use tracing::{error, info, warn};

use crate::errors::JsonApiError;
use crate::routes::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_all).post(create))
        .route("/search/:search", get(search_by_name))
        .route("/highestSalary", get(highest_salary))
        .route("/topTenHighestEarningEmployeeNames", get(top_ten_highest_earning_names))
        .route("/:id", get(get_by_id).delete(delete_by_id))
}

/// 200 with the list, or 204 when there is nothing to show.
fn list_or_no_content<T: serde::Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(items).into_response()
    }
}

#[utoipa::path(
    get, path = "/api/v1/employee", tag = "employee",
    responses(
        (status = 200, description = "All employees", body = [crate::openapi::EmployeeDoc]),
        (status = 204, description = "No employees or upstream unavailable")
    )
)]
pub async fn list_all(State(state): State<AppState>) -> Response {
    let employees = state.employees.list_all().await;
    if employees.is_empty() {
        warn!("no employees found");
    }
    list_or_no_content(employees)
}

#[utoipa::path(
    get, path = "/api/v1/employee/search/{search}", tag = "employee",
    params(("search" = String, Path, description = "Case-insensitive name fragment")),
    responses(
        (status = 200, description = "Matching employees", body = [crate::openapi::EmployeeDoc]),
        (status = 204, description = "No match")
    )
)]
pub async fn search_by_name(State(state): State<AppState>, Path(search): Path<String>) -> Response {
    info!(%search, "received request to search employees");
    let hits = state.employees.search_by_name(&search).await;
    if hits.is_empty() {
        warn!(%search, "no employees found for search string");
    }
    list_or_no_content(hits)
}

#[utoipa::path(
    get, path = "/api/v1/employee/{id}", tag = "employee",
    params(("id" = String, Path, description = "Upstream employee id")),
    responses(
        (status = 200, description = "Employee", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.employees.get_by_id(&id).await {
        Some(employee) => Json(employee).into_response(),
        None => {
            warn!(%id, "employee not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

#[utoipa::path(
    get, path = "/api/v1/employee/highestSalary", tag = "employee",
    responses(
        (status = 200, description = "Highest salary", body = i64),
        (status = 204, description = "No salaries available")
    )
)]
pub async fn highest_salary(State(state): State<AppState>) -> Response {
    let max = state.employees.highest_salary().await;
    if max == 0 {
        warn!("no salaries available");
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(max).into_response()
}

#[utoipa::path(
    get, path = "/api/v1/employee/topTenHighestEarningEmployeeNames", tag = "employee",
    responses(
        (status = 200, description = "Names, best paid first", body = [String]),
        (status = 204, description = "No data")
    )
)]
pub async fn top_ten_highest_earning_names(State(state): State<AppState>) -> Response {
    list_or_no_content(state.employees.top_earner_names().await)
}

#[utoipa::path(
    post, path = "/api/v1/employee", tag = "employee",
    request_body = crate::openapi::CreateEmployeeDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Validation Error or Create Failed")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<models::Employee>), JsonApiError> {
    let Json(input) =
        payload.map_err(|e| JsonApiError::bad_request("Invalid Body", e.body_text()))?;
    input
        .validate()
        .map_err(|e| JsonApiError::bad_request("Validation Error", e.to_string()))?;

    info!(name = %input.name, "creating employee");
    match state.employees.create(&input).await {
        Ok(created) => Ok((StatusCode::CREATED, Json(created))),
        Err(e) => Err(JsonApiError::bad_request("Create Failed", e.to_string())),
    }
}

#[utoipa::path(
    delete, path = "/api/v1/employee/{id}", tag = "employee",
    params(("id" = String, Path, description = "Upstream employee id")),
    responses(
        (status = 200, description = "Confirmation text", body = String),
        (status = 500, description = "Not found or delete failed", body = String)
    )
)]
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, String) {
    match state.employees.delete_by_id(&id).await {
        Ok(confirmation) => (StatusCode::OK, confirmation),
        Err(e) => {
            match &e {
                ServiceError::EmployeeNotFound(_) => warn!(%id, "delete target not found"),
                _ => error!(%id, err = %e, "delete employee failed"),
            }
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
