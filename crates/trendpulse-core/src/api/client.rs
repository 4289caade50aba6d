//! HTTP client for the TrendPulse backend

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::{DashboardSource, DRAFTS_PATH, METRICS_PATH, POSTS_PATH, STATUS_PATH, TRENDS_PATH};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::models::{Draft, EngagementReport, PlatformStatus, ScheduledPost, Trend};

/// Reads dashboard data from the backend over HTTP.
///
/// Every request is bounded by `api.request_timeout`; hitting it yields
/// [`Error::Timeout`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client from the API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        // Keep exactly one trailing slash so relative joins append to any
        // path prefix instead of replacing its last segment.
        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| Error::config(format!("invalid base URL '{}': {e}", config.base_url)))?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::config(format!("invalid endpoint path '{path}': {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint_url(path)?;
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::from_reqwest(path, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = path, status = status.as_u16(), "backend returned error status");
            return Err(Error::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::from_reqwest(path, e))?;

        debug!(
            endpoint = path,
            bytes = body.len(),
            elapsed_ms = elapsed_ms(started),
            "fetched"
        );

        serde_json::from_slice(&body).map_err(|source| Error::Decode {
            endpoint: path.to_string(),
            source,
        })
    }
}

/// Milliseconds since `started`, saturating
fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[async_trait]
impl DashboardSource for ApiClient {
    async fn trends(&self) -> Result<Vec<Trend>> {
        self.get_json(TRENDS_PATH).await
    }

    async fn social_status(&self) -> Result<PlatformStatus> {
        self.get_json(STATUS_PATH).await
    }

    async fn drafts(&self) -> Result<Vec<Draft>> {
        self.get_json(DRAFTS_PATH).await
    }

    async fn posts(&self) -> Result<Vec<ScheduledPost>> {
        self.get_json(POSTS_PATH).await
    }

    async fn metrics(&self) -> Result<EngagementReport> {
        self.get_json(METRICS_PATH).await
    }
}
