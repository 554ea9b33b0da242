//! Error types for the search pipeline.
//!
//! Messages are user-facing: the HTTP layer returns them verbatim in the
//! `error` field of the response body.

/// Errors that abort a single search request.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The client sent an empty or oversized query.
    #[error("{0}")]
    Validation(String),

    /// The upstream API did not answer within the configured timeout.
    #[error("요청 시간 초과. 다시 시도해주세요")]
    UpstreamTimeout,

    /// The upstream API answered with a non-200 status.
    #[error("API 호출 실패: {0}")]
    UpstreamStatus(u16),

    /// The request never produced an upstream response.
    #[error("오류 발생: {0}")]
    UpstreamTransport(String),

    /// The upstream API succeeded but returned no items.
    #[error("검색 결과가 없습니다")]
    NoResults,

    /// Anything else, e.g. a malformed upstream or client body.
    #[error("오류 발생: {0}")]
    Unexpected(String),
}

impl SearchError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = SearchError::validation("검색어를 입력하세요");
        assert_eq!(err.to_string(), "검색어를 입력하세요");
    }

    #[test]
    fn test_upstream_status_embeds_code() {
        assert_eq!(SearchError::UpstreamStatus(401).to_string(), "API 호출 실패: 401");
    }

    #[test]
    fn test_unexpected_embeds_cause() {
        let err: SearchError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, SearchError::Unexpected(_)));
        assert!(err.to_string().starts_with("오류 발생: "));
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(SearchError::NoResults.to_string(), "검색 결과가 없습니다");
        assert_eq!(SearchError::UpstreamTimeout.to_string(), "요청 시간 초과. 다시 시도해주세요");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
