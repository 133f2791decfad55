//! HTTP-facing error type.
//!
//! Every API handler returns `Result<T, ApiError>`. The browser only ever
//! learns that a request failed; provider detail is logged and dropped.

use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::chat::ChatError;
use crate::llm::LlmError;

/// Body returned by the stateless proxy endpoint on failure.
pub const PROXY_FAILURE: &str = "An error occurred while processing your request.";

/// Body returned by the session exchange endpoint on failure.
pub const EXCHANGE_FAILURE: &str = "Failed to get a response from the bot. Please try again.";

/// All errors that can occur in a request handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The stateless proxy call failed.
    #[error("proxy error: {0}")]
    Proxy(#[from] LlmError),

    /// A session exchange failed.
    #[error("exchange error: {0}")]
    Exchange(#[from] ChatError),

    /// The caller referenced a session that does not exist.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// The request outlived the configured timeout.
    #[error("request to {path} timed out after {after:?}")]
    Timeout { path: String, after: Duration },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            Self::Proxy(e) => {
                error!(error = %e, "Error in chat API");
                (StatusCode::INTERNAL_SERVER_ERROR, PROXY_FAILURE.to_owned())
            }
            Self::Exchange(ChatError::EmptyMessage) => {
                (StatusCode::BAD_REQUEST, "message is empty".to_owned())
            }
            Self::Exchange(ChatError::Upstream(e)) => {
                error!(error = %e, "Error in chat exchange");
                (StatusCode::INTERNAL_SERVER_ERROR, EXCHANGE_FAILURE.to_owned())
            }
            Self::SessionNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("session not found: {id}"))
            }
            Self::Timeout { path, after } => {
                error!(path = %path, after = ?after, "Request timed out");
                let message = if path.starts_with("/api/sessions/") {
                    EXCHANGE_FAILURE
                } else {
                    PROXY_FAILURE
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}
