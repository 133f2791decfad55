//! LLM driver trait and implementations.
//!
//! This module provides the abstraction the proxy endpoint and the chat
//! exchange flow use to reach a hosted generative-language model. A driver
//! turns one prompt into one generated reply; there is no streaming, no
//! retrying and no tool use.
//!
//! # Drivers
//!
//! - [`GeminiDriver`]: Google Gemini `generateContent` API
//! - [`ChatCompletionsDriver`]: `OpenAI` Chat Completions API and compatibles
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_chat::llm::{LlmSettings, Provider, build_driver};
//!
//! let settings = LlmSettings {
//!     base_url: "https://generativelanguage.googleapis.com".to_string(),
//!     api_key: Some("AIza...".to_string()),
//!     model: "gemini-1.5-flash".to_string(),
//!     provider: Provider::Gemini,
//! };
//! let driver = build_driver(settings);
//! let reply = driver.generate("Hello!").await?;
//! ```

pub mod chat_completions;
pub mod gemini;
pub mod provider;

pub use chat_completions::ChatCompletionsDriver;
pub use gemini::GeminiDriver;
pub use provider::{GEMINI_BASE_URL, Provider};

use std::sync::Arc;

use thiserror::Error;

/// Default Gemini model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// LLM connection and model settings.
#[derive(Clone)]
pub struct LlmSettings {
    /// Base URL for the LLM API (e.g., `https://generativelanguage.googleapis.com`).
    pub base_url: String,
    /// Optional API key for authentication.
    pub api_key: Option<String>,
    /// Model identifier (e.g., `gemini-1.5-flash`).
    pub model: String,
    /// Provider type (auto-detected from `base_url`).
    pub provider: Provider,
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("provider", &self.provider)
            .finish()
    }
}

/// Errors produced while calling the provider.
///
/// These never reach the browser; the HTTP layer collapses all of them into
/// a single generic failure and logs the detail.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level failure (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("provider returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Provider answered with a body we could not decode.
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Provider refused the prompt.
    #[error("prompt blocked: {0}")]
    Blocked(String),

    /// Provider answered successfully but generated no text.
    #[error("provider returned no text")]
    EmptyResponse,
}

/// Trait for generative-language drivers.
#[async_trait::async_trait]
pub trait LlmDriver: Send + Sync {
    /// Generate a reply for a single prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the provider rejects it, or
    /// the reply contains no text.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Build the driver that speaks the configured provider's protocol.
#[must_use]
pub fn build_driver(settings: LlmSettings) -> Arc<dyn LlmDriver> {
    if settings.provider.is_gemini() {
        Arc::new(GeminiDriver::new(settings))
    } else {
        Arc::new(ChatCompletionsDriver::new(settings))
    }
}

/// Turn a non-success response into [`LlmError::Status`].
pub(crate) async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(LlmError::Status {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_debug_redacts_key() {
        let settings = LlmSettings {
            base_url: GEMINI_BASE_URL.to_string(),
            api_key: Some("secret-key".to_string()),
            model: DEFAULT_MODEL.to_string(),
            provider: Provider::Gemini,
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
