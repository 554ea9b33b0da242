//! HTTP client for the Naver Shopping search API.

use super::models::ShopResponse;
use crate::config::{Config, Credentials};
use crate::error::{Result, SearchError};
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;

/// Upper bound the API accepts for `display`.
pub const MAX_DISPLAY: usize = 100;

/// Trait for shopping search - enables mocking for tests.
#[async_trait]
pub trait ShopSearch: Send + Sync {
    /// Fetches one page of items sorted by ascending price.
    async fn search(&self, query: &str, display: usize) -> Result<ShopResponse>;
}

/// Naver Shopping API client.
pub struct NaverClient {
    client: Client,
    api_url: String,
    credentials: Credentials,
    timeout: Duration,
}

impl NaverClient {
    /// Creates a new client from the endpoint, credentials and timeout in `config`.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        if !config.credentials.is_complete() {
            warn!("NAVER_CLIENT_ID / NAVER_CLIENT_SECRET not set; upstream calls will be rejected");
        }

        let client = Client::builder().gzip(true).build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            credentials: config.credentials.clone(),
            timeout: config.timeout(),
        })
    }

    /// Updates the request timeout.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    fn search_url(&self, query: &str, display: usize) -> String {
        format!(
            "{}?query={}&display={}&sort=asc",
            self.api_url,
            urlencoding::encode(query),
            display.min(MAX_DISPLAY)
        )
    }

    /// Performs the GET, bounding both the send and the body read by the timeout.
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let request = async {
            let response = self
                .client
                .get(url)
                .header("X-Naver-Client-Id", self.credentials.client_id.as_str())
                .header("X-Naver-Client-Secret", self.credentials.client_secret.as_str())
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| SearchError::UpstreamTransport(e.to_string()))?;

            let status = response.status().as_u16();
            debug!("Response status: {}", status);

            if status != 200 {
                warn!("Upstream returned status {}", status);
                return Err(SearchError::UpstreamStatus(status));
            }

            response.text().await.map_err(|e| SearchError::UpstreamTransport(e.to_string()))
        };

        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Upstream call exceeded {:?}", self.timeout);
                Err(SearchError::UpstreamTimeout)
            }
        }
    }
}

#[async_trait]
impl ShopSearch for NaverClient {
    async fn search(&self, query: &str, display: usize) -> Result<ShopResponse> {
        info!("Searching: {} (display {})", query, display);

        let body = self.fetch(&self.search_url(query, display)).await?;
        let response: ShopResponse = serde_json::from_str(&body)?;

        debug!(
            "Upstream total {} (start {:?}, display {:?}, built {:?})",
            response.total, response.start, response.display, response.last_build_date
        );
        Ok(response)
    }
}
