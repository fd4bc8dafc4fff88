pub mod errors;
pub mod openapi;
pub mod routes;
pub mod startup;

pub use routes::{build_router, AppState};
pub use startup::{build_app, run_with_config};
