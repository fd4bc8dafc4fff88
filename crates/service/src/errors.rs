use thiserror::Error;

/// Why a single upstream round-trip did not yield what was asked for.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("upstream unreachable: {0}")]
    Transport(String),
    #[error("upstream responded with status {0}")]
    Status(u16),
    #[error("malformed upstream envelope: {0}")]
    Decode(String),
    #[error("upstream envelope carried no data")]
    MissingData,
    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),
}

impl UpstreamError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(404))
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Employee not found with ID: {0}")]
    EmployeeNotFound(String),
    #[error("Failed to create employee: {0}")]
    CreateFailed(String),
    #[error("Error while deleting employee: {0}")]
    DeleteFailed(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ServiceError {
    pub fn not_found(id: &str) -> Self { Self::EmployeeNotFound(id.to_string()) }
}
