//! Provider-specific configuration and detection.
//!
//! This module handles differences between generative-language API
//! providers: URL patterns, authentication placement, and which wire
//! protocol the driver has to speak.

/// Default base URL for the Google Generative Language API.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Supported LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Google Gemini (generativelanguage.googleapis.com)
    Gemini,
    /// `OpenAI` (api.openai.com)
    OpenAI,
    /// `OpenRouter` (openrouter.ai)
    OpenRouter,
    /// Groq (groq.com)
    Groq,
    /// Generic OpenAI-compatible provider
    Generic,
}

impl Provider {
    /// Detect provider from base URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gemini_chat::llm::Provider;
    ///
    /// let provider = Provider::detect_from_url("https://generativelanguage.googleapis.com");
    /// assert_eq!(provider, Provider::Gemini);
    /// ```
    #[must_use]
    pub fn detect_from_url(base_url: &str) -> Self {
        let lower = base_url.to_lowercase();

        if lower.contains("generativelanguage.googleapis.com") {
            Self::Gemini
        } else if lower.contains("openrouter.ai") {
            Self::OpenRouter
        } else if lower.contains("groq.com") {
            Self::Groq
        } else if lower.contains("openai.com") {
            Self::OpenAI
        } else {
            Self::Generic
        }
    }

    /// Whether this provider speaks the Gemini `generateContent` protocol.
    #[must_use]
    pub fn is_gemini(self) -> bool {
        matches!(self, Self::Gemini)
    }

    /// Build the generation URL for this provider.
    ///
    /// Gemini addresses the model in the path; every other provider uses the
    /// OpenAI-compatible chat completions route and names the model in the
    /// request body.
    #[must_use]
    pub fn build_generate_url(self, base_url: &str, model: &str) -> String {
        let base = base_url.trim_end_matches('/');

        match self {
            Self::Gemini => format!("{base}/v1beta/models/{model}:generateContent"),
            Self::OpenRouter => format!("{base}/api/v1/chat/completions"),
            Self::Groq => format!("{base}/openai/v1/chat/completions"),
            Self::OpenAI | Self::Generic => format!("{base}/v1/chat/completions"),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Gemini => "gemini",
            Self::OpenAI => "openai",
            Self::OpenRouter => "openrouter",
            Self::Groq => "groq",
            Self::Generic => "generic",
        };
        f.write_str(name)
    }
}
