//! OpenAI Chat Completions API driver.
//!
//! This module implements the [`LlmDriver`] trait for the OpenAI Chat
//! Completions API (`/v1/chat/completions`) and the many providers that
//! mirror it. Requests are non-streaming.

use super::{LlmDriver, LlmError, LlmSettings, check_status};

/// Driver for the OpenAI Chat Completions API.
#[derive(Clone)]
pub struct ChatCompletionsDriver {
    http: reqwest::Client,
    settings: LlmSettings,
}

impl std::fmt::Debug for ChatCompletionsDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionsDriver")
            .field("settings", &self.settings)
            .finish()
    }
}

impl ChatCompletionsDriver {
    /// Create a new Chat Completions driver with the given settings.
    #[must_use]
    pub fn new(settings: LlmSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }
}

/// Pull the assistant text out of a completion body.
fn extract_content(v: &serde_json::Value) -> Result<String, LlmError> {
    let content = v["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or_default();
    if content.is_empty() {
        Err(LlmError::EmptyResponse)
    } else {
        Ok(content.to_string())
    }
}

#[async_trait::async_trait]
impl LlmDriver for ChatCompletionsDriver {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = self
            .settings
            .provider
            .build_generate_url(&self.settings.base_url, &self.settings.model);

        let body = serde_json::json!({
            "model": self.settings.model,
            "stream": false,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let mut rb = self.http.post(&url).json(&body);
        if let Some(k) = &self.settings.api_key {
            rb = rb.bearer_auth(k);
        }

        let resp = check_status(rb.send().await?).await?;
        let bytes = resp.bytes().await?;
        let v: serde_json::Value = serde_json::from_slice(&bytes)?;

        extract_content(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_content() {
        let v = serde_json::json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": "Hi there" } }]
        });
        assert_eq!(extract_content(&v).unwrap(), "Hi there");
    }

    #[test]
    fn test_extract_content_missing() {
        let v = serde_json::json!({ "choices": [] });
        assert!(matches!(extract_content(&v), Err(LlmError::EmptyResponse)));
    }
}
