use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct EmployeeDoc {
    pub id: String,
    pub employee_name: String,
    pub employee_salary: i64,
    pub employee_age: i64,
    pub employee_title: String,
    pub employee_email: Option<String>,
}

#[derive(ToSchema)]
pub struct CreateEmployeeDoc {
    pub name: String,
    /// Must be at least 1.
    pub salary: i64,
    /// Between 16 and 75 inclusive.
    pub age: i64,
    pub title: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::list_all,
        crate::routes::employees::search_by_name,
        crate::routes::employees::get_by_id,
        crate::routes::employees::highest_salary,
        crate::routes::employees::top_ten_highest_earning_names,
        crate::routes::employees::create,
        crate::routes::employees::delete_by_id,
    ),
    components(
        schemas(
            HealthResponse,
            EmployeeDoc,
            CreateEmployeeDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employee")
    )
)]
pub struct ApiDoc;
