use serde::{Deserialize, Serialize};

/// `{ data, status }` wrapper the upstream puts around every response.
///
/// `status` is free text; nothing decides on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub status: Option<String>,
}

impl<T> Envelope<T> {
    pub fn new(data: T, status: impl Into<String>) -> Self {
        Self { data: Some(data), status: Some(status.into()) }
    }

    pub fn empty(status: impl Into<String>) -> Self {
        Self { data: None, status: Some(status.into()) }
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
