//! Error types for the proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Proxy Error Enum ==
/// Unified error type for the proxy.
///
/// Only confirmed successful upstream payloads are ever cached, so every
/// variant here represents a request that left the cache untouched.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// A required query parameter was absent or blank
    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),

    /// The upstream API answered with a non-success status
    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(StatusCode),

    /// The upstream request exceeded the configured timeout
    #[error("Upstream request timed out")]
    UpstreamTimeout,

    /// The upstream API could not be reached or its response not read
    #[error("Upstream request failed: {0}")]
    UpstreamUnreachable(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProxyError::UpstreamTimeout
        } else {
            ProxyError::UpstreamUnreachable(err.to_string())
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ProxyError::UpstreamStatus(_) | ProxyError::UpstreamUnreachable(_) => {
                StatusCode::BAD_GATEWAY
            }
            ProxyError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;
