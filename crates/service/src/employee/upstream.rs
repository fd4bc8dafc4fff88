use async_trait::async_trait;
use models::{CreateEmployeeInput, Employee};

use crate::errors::UpstreamError;

/// One request/response round-trip per call against the employee store.
///
/// The store offers no filtering or sorting, so every derived view is built
/// from `fetch_all`.
#[async_trait]
pub trait EmployeeUpstream: Send + Sync {
    /// `GET <collection>`.
    async fn fetch_all(&self) -> Result<Vec<Employee>, UpstreamError>;

    /// `GET <collection>/{id}`. A 404 or an absent payload is `Ok(None)`.
    async fn fetch_one(&self, id: &str) -> Result<Option<Employee>, UpstreamError>;

    /// `POST <collection>` with `{name, salary, age, title}`.
    async fn create(&self, input: &CreateEmployeeInput) -> Result<Employee, UpstreamError>;

    /// `DELETE <collection>` with `{name}`; the store deletes by name only.
    async fn delete_by_name(&self, name: &str) -> Result<(), UpstreamError>;
}
