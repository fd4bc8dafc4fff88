//! Reqwest-backed adapter for the upstream employee store.
//!
//! Owns transport details only: URL building, timeouts, status mapping and
//! envelope decoding. Exactly one attempt per call.

use std::time::Instant;

use async_trait::async_trait;
use configs::UpstreamConfig;
use models::{CreateEmployeeInput, Employee, Envelope};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::employee::upstream::EmployeeUpstream;
use crate::errors::UpstreamError;
use crate::observability::record_upstream;

pub struct HttpEmployeeUpstream {
    client: Client,
    collection: Url,
}

impl HttpEmployeeUpstream {
    /// Build an adapter with explicit connect and per-request timeouts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` when `base_url` cannot carry an id segment, and
    /// `Transport` when the reqwest client cannot be constructed.
    pub fn new(cfg: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let collection = Url::parse(&cfg.base_url)
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {e}", cfg.base_url)))?;
        if collection.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(cfg.base_url.clone()));
        }
        let client = Client::builder()
            .connect_timeout(cfg.connect_timeout())
            .timeout(cfg.request_timeout())
            .build()
            .map_err(map_transport_error)?;
        Ok(Self { client, collection })
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    fn item_url(&self, id: &str) -> Result<Url, UpstreamError> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.collection.to_string()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}

#[async_trait]
impl EmployeeUpstream for HttpEmployeeUpstream {
    async fn fetch_all(&self) -> Result<Vec<Employee>, UpstreamError> {
        let started = Instant::now();
        debug!(url = %self.collection, "upstream fetch_all");
        let result: Result<Vec<Employee>, UpstreamError> = async {
            let response = self
                .client
                .get(self.collection.clone())
                .send()
                .await
                .map_err(map_transport_error)?;
            read_envelope::<Vec<Employee>>(response)
                .await?
                .into_data()
                .ok_or(UpstreamError::MissingData)
        }
        .await;
        observe("fetch_all", started, &result);
        result
    }

    async fn fetch_one(&self, id: &str) -> Result<Option<Employee>, UpstreamError> {
        let started = Instant::now();
        let result: Result<Option<Employee>, UpstreamError> = async {
            let url = self.item_url(id)?;
            debug!(%url, "upstream fetch_one");
            let response = self.client.get(url).send().await.map_err(map_transport_error)?;
            match read_envelope::<Employee>(response).await {
                Ok(envelope) => Ok(envelope.into_data()),
                Err(e) if e.is_not_found() => Ok(None),
                Err(e) => Err(e),
            }
        }
        .await;
        observe("fetch_one", started, &result);
        result
    }

    async fn create(&self, input: &CreateEmployeeInput) -> Result<Employee, UpstreamError> {
        let started = Instant::now();
        debug!(url = %self.collection, name = %input.name, "upstream create");
        let result: Result<Employee, UpstreamError> = async {
            let response = self
                .client
                .post(self.collection.clone())
                .json(input)
                .send()
                .await
                .map_err(map_transport_error)?;
            read_envelope::<Employee>(response)
                .await?
                .into_data()
                .ok_or(UpstreamError::MissingData)
        }
        .await;
        observe("create", started, &result);
        result
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), UpstreamError> {
        let started = Instant::now();
        debug!(url = %self.collection, %name, "upstream delete_by_name");
        let result: Result<(), UpstreamError> = async {
            let response = self
                .client
                .delete(self.collection.clone())
                .json(&serde_json::json!({ "name": name }))
                .send()
                .await
                .map_err(map_transport_error)?;
            let status = response.status();
            if status.is_success() {
                Ok(())
            } else {
                Err(UpstreamError::Status(status.as_u16()))
            }
        }
        .await;
        observe("delete_by_name", started, &result);
        result
    }
}

async fn read_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<Envelope<T>, UpstreamError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(UpstreamError::Status(status.as_u16()));
    }
    serde_json::from_slice(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
}

fn map_transport_error(error: reqwest::Error) -> UpstreamError {
    if error.is_timeout() {
        UpstreamError::Transport(format!("timed out: {error}"))
    } else {
        UpstreamError::Transport(error.to_string())
    }
}

fn observe<T>(op: &str, started: Instant, result: &Result<T, UpstreamError>) {
    let elapsed = started.elapsed();
    if let Err(e) = result {
        warn!(op, error = %e, elapsed_ms = elapsed.as_millis() as u64, "upstream call failed");
    }
    record_upstream(op, result.is_ok(), elapsed.as_secs_f64());
}
