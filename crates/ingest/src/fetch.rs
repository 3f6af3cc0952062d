//! Envelope decoding and typed dataset fetches.
//!
//! Every endpoint answers with `{"success": bool, "results": [...]}`.
//! The `success` flag is checked before `results` is decoded, so a failure
//! envelope without results is reported as [`FetchError::ApiFailure`]
//! rather than a decode error.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use types::{NewsItem, RumorItem, SnapshotRecord};

use crate::endpoint::Endpoint;
use crate::error::FetchError;
use crate::transport::Transport;

#[derive(Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    results: serde_json::Value,
}

/// Decode an envelope body into its typed `results`.
pub fn decode_envelope<R: DeserializeOwned>(
    endpoint: Endpoint,
    body: &str,
) -> Result<Vec<R>, FetchError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|source| FetchError::Decode { endpoint, source })?;
    if !envelope.success {
        return Err(FetchError::ApiFailure { endpoint });
    }
    serde_json::from_value(envelope.results)
        .map_err(|source| FetchError::Decode { endpoint, source })
}

/// Fetches datasets from one API base through a [`Transport`].
pub struct Fetcher<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch one endpoint and decode its results as `R`.
    ///
    /// A single attempt; failures are returned, never retried.
    pub async fn fetch<R: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<Vec<R>, FetchError> {
        let url = endpoint.url(&self.base_url);
        let body = self
            .transport
            .get(&url)
            .await
            .map_err(|source| FetchError::Network { endpoint, source })?;
        let results = decode_envelope(endpoint, &body)?;
        debug!(%endpoint, count = results.len(), "fetched dataset");
        Ok(results)
    }

    /// Full overall history.
    pub async fn overall_history(&self) -> Result<Vec<SnapshotRecord>, FetchError> {
        self.fetch(Endpoint::Overall).await
    }

    /// Newest snapshot of every region.
    pub async fn regions(&self) -> Result<Vec<SnapshotRecord>, FetchError> {
        self.fetch(Endpoint::Region).await
    }

    pub async fn news(&self) -> Result<Vec<NewsItem>, FetchError> {
        self.fetch(Endpoint::News).await
    }

    pub async fn rumors(&self) -> Result<Vec<RumorItem>, FetchError> {
        self.fetch(Endpoint::Rumors).await
    }
}
