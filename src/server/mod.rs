//! HTTP surface: router, shared state and the serve loop.

mod handlers;
mod response;

use crate::commands::SearchCommand;
use crate::config::Config;
use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use response::status_for;

/// Read-only state shared by all requests.
pub struct AppState {
    pub search: SearchCommand,
}

impl AppState {
    pub fn new(search: SearchCommand) -> Self {
        Self { search }
    }
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/search", post(handlers::search))
        .route("/api/health", get(handlers::health))
        .with_state(state)
        // Method and path only
        .layer(TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }))
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: &Config) -> Result<()> {
    let search = SearchCommand::from_config(config)?;
    let app = router(Arc::new(AppState::new(search)));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("lowprice listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
