//! Aggregation layer over the upstream employee store.
//! - Owns every upstream round-trip (`employee::upstream`, `employee::http`).
//! - Derives search, ranking and max-salary results locally (`employee::ranking`).
//! - Translates delete-by-id into the upstream's delete-by-name.

pub mod errors;
pub mod employee;
pub mod observability;
pub mod test_support;

pub use employee::http::HttpEmployeeUpstream;
pub use employee::service::EmployeeService;
pub use employee::upstream::EmployeeUpstream;
