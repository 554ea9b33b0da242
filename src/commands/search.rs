//! Search command implementation.

use crate::config::Config;
use crate::error::{Result, SearchError};
use crate::naver::normalizer::summarize;
use crate::naver::{NaverClient, SearchResult, ShopSearch, MAX_DISPLAY};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Longest accepted query, in characters, after trimming.
pub const MAX_QUERY_CHARS: usize = 100;

const EMPTY_QUERY: &str = "검색어를 입력하세요";
const QUERY_TOO_LONG: &str = "검색어는 100자 이내여야 합니다";

/// Search input as sent by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub display: Option<i64>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSearch {
    /// Trimmed query
    pub query: String,
    /// Requested count, at most 100; may still be zero or negative
    pub display: Option<i64>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, display: Option<i64>) -> Self {
        Self { query: query.into(), display }
    }

    /// Checks the query and clamps `display` from above.
    pub fn validate(&self) -> Result<ValidatedSearch> {
        let query = self.query.trim();

        if query.is_empty() {
            return Err(SearchError::validation(EMPTY_QUERY));
        }

        if query.chars().count() > MAX_QUERY_CHARS {
            return Err(SearchError::validation(QUERY_TOO_LONG));
        }

        Ok(ValidatedSearch {
            query: query.to_string(),
            display: self.display.map(|d| d.min(MAX_DISPLAY as i64)),
        })
    }
}

/// Executes a product search against the upstream API.
pub struct SearchCommand {
    client: Arc<dyn ShopSearch>,
    default_display: usize,
}

impl SearchCommand {
    /// Creates a new search command over any `ShopSearch` implementation.
    pub fn new(client: Arc<dyn ShopSearch>, default_display: i64) -> Self {
        Self { client, default_display: default_display.clamp(1, MAX_DISPLAY as i64) as usize }
    }

    /// Creates a search command backed by the Naver API.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = NaverClient::new(config)?;
        Ok(Self::new(Arc::new(client), config.default_display))
    }

    /// Resolves the number of items to request and return.
    ///
    /// Absent and non-positive counts fall back to the configured default.
    pub fn display_count(&self, requested: Option<i64>) -> usize {
        match requested {
            Some(d) if d > 0 => d as usize,
            _ => self.default_display,
        }
    }

    /// Validates, fetches and normalizes one search.
    pub async fn execute(&self, request: &SearchRequest) -> Result<SearchResult> {
        let search = request.validate()?;
        let display = self.display_count(search.display);

        debug!("Validated query {:?}, display {}", search.query, display);

        let response = self.client.search(&search.query, display).await?;
        let result = summarize(&search.query, response, display)?;

        info!(
            "{} upstream matches for {:?} (lowest {}, range {}-{})",
            result.total,
            search.query,
            result.lowest_price.lprice,
            result.price_range.min,
            result.price_range.max
        );

        Ok(result)
    }
}
