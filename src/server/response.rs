//! Maps `SearchError` onto HTTP responses.

use crate::error::SearchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, warn};

/// Status code each error kind is reported with.
pub fn status_for(err: &SearchError) -> StatusCode {
    match err {
        SearchError::Validation(_) | SearchError::UpstreamStatus(_) => StatusCode::BAD_REQUEST,
        SearchError::NoResults => StatusCode::NOT_FOUND,
        SearchError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
        SearchError::UpstreamTransport(_) | SearchError::Unexpected(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), "Search failed: {}", message);
        } else {
            warn!(status = status.as_u16(), "Search rejected: {}", message);
        }

        (status, Json(serde_json::json!({"success": false, "error": message}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&SearchError::validation("x")), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&SearchError::UpstreamStatus(401)), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&SearchError::NoResults), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&SearchError::UpstreamTimeout), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            status_for(&SearchError::UpstreamTransport("refused".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&SearchError::Unexpected("bad json".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = SearchError::NoResults.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
