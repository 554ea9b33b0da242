//! Route handlers.

use super::AppState;
use crate::commands::SearchRequest;
use crate::error::SearchError;
use crate::naver::SearchResult;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{Html, IntoResponse, Json},
};
use std::sync::Arc;
use tracing::debug;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET / - search page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /api/search
///
/// # Request
/// - `query`: search text (required, 1-100 chars after trimming)
/// - `display`: number of items to return (default 10, max 100)
///
/// # Errors
/// - 400: invalid query, or upstream rejected the call
/// - 404: upstream returned no items
/// - 500: transport failure or malformed body
/// - 504: upstream timed out
pub async fn search(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResult>, SearchError> {
    let Json(request) = payload.map_err(|e| SearchError::Unexpected(e.body_text()))?;
    debug!("Search request: {:?}", request.query);

    state.search.execute(&request).await.map(Json)
}

/// GET /api/health - liveness only.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}
