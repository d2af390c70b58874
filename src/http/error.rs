//! Relay error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures a relay request can hit.
///
/// Every variant maps to a generic 500 with an empty body. The relay
/// makes no recovery attempt and exposes no error detail to the
/// caller; the tracing log is the only diagnostic.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Request body is not valid UTF-8.
    #[error("request body is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Request body is not parseable JSON.
    #[error("request body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The downstream call failed (encode, connect, send, or body read).
    #[error("downstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Relay request failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
