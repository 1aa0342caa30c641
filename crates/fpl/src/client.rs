//! HTTP client for the upstream fantasy-league REST API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use scout_core::error::{UpstreamError, UpstreamResult};
use scout_core::metrics::{record_upstream_error, record_upstream_request};
use scout_core::models::{Bootstrap, ElementSummary};
use scout_core::ports::FantasyApi;

use crate::payload::{BootstrapPayload, ElementSummaryPayload};

/// Configuration for the upstream client.
#[derive(Debug, Clone)]
pub struct FplClientConfig {
    /// Base URL of the upstream REST API (no trailing slash required).
    pub base_url: String,
}

impl Default for FplClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fantasy.premierleague.com/api".to_string(),
        }
    }
}

/// Upstream REST adapter implementing the [`FantasyApi`] port.
///
/// Stateless apart from the pooled HTTP connection; safe to share across
/// requests as `Arc<dyn FantasyApi>`. Every call issues one independent
/// GET - deduplication within a response tree is the caller's concern.
pub struct FplClient {
    http: reqwest::Client,
    base_url: String,
}

impl FplClient {
    /// Build a client with a pooled HTTP connection.
    pub fn new(config: FplClientConfig) -> UpstreamResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::Transport {
                endpoint: config.base_url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `{base}/{path}/` and decode the JSON body.
    ///
    /// `endpoint` is the metrics/error label: the endpoint name without
    /// per-request path parameters.
    async fn get_json<T>(&self, path: &str, endpoint: &'static str) -> UpstreamResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}/", self.base_url, path);
        debug!(%url, "Fetching upstream");
        record_upstream_request(endpoint);

        let response = self.http.get(&url).send().await.map_err(|e| {
            record_upstream_error(endpoint, "transport");
            UpstreamError::Transport {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            record_upstream_error(endpoint, "status");
            return Err(UpstreamError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            record_upstream_error(endpoint, "decode");
            UpstreamError::Decode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl FantasyApi for FplClient {
    async fn bootstrap(&self) -> UpstreamResult<Bootstrap> {
        let payload: BootstrapPayload = self.get_json("bootstrap-static", "bootstrap-static").await?;
        Ok(payload.into())
    }

    async fn element_summary(&self, player_id: i32) -> UpstreamResult<ElementSummary> {
        let path = format!("element-summary/{player_id}");
        let payload: ElementSummaryPayload = self.get_json(&path, "element-summary").await?;
        Ok(payload.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trailing slashes in the configured base URL must not produce
    // double-slash request paths.
    #[test]
    fn test_base_url_normalization() {
        let client = FplClient::new(FplClientConfig {
            base_url: "https://example.test/api/".into(),
        })
        .unwrap();
        assert_eq!(client.base_url, "https://example.test/api");
    }

    #[test]
    fn test_default_base_url() {
        let config = FplClientConfig::default();
        assert_eq!(config.base_url, "https://fantasy.premierleague.com/api");
    }
}
