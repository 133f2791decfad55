//! Layered configuration.
//!
//! Server settings come from, lowest priority first: built-in defaults, a
//! YAML file (`--config` / `CONFIG_FILE`, else `./config.yaml` if present),
//! `CHAT_`-prefixed environment variables (`CHAT_SERVER__PORT=8000`), and
//! finally CLI flags.
//!
//! Provider settings are read separately from the process environment by
//! [`load_llm_settings`].

use std::path::{Path, PathBuf};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::llm::{DEFAULT_MODEL, GEMINI_BASE_URL, LlmSettings, Provider};

/// Config file picked up from the working directory when no path is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Seconds of inactivity before a chat session is dropped
    #[arg(long, env = "SESSION_TTL_SECS")]
    pub session_ttl_secs: Option<u64>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub resilience: ResilienceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub ttl_secs: u64,
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub timeout_disabled: bool,
    pub request_timeout_secs: u64,
    /// Image attachments travel inline as data URLs, so this is generous.
    pub body_limit_bytes: usize,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("session.ttl_secs", 30 * 60)?
            .set_default("session.sweep_interval_secs", 60)?
            .set_default("resilience.timeout_disabled", false)?
            .set_default("resilience.request_timeout_secs", 60)?
            .set_default("resilience.body_limit_bytes", 10 * 1024 * 1024)?;

        match &cli.config {
            Some(path) => builder = builder.add_source(File::from(path.as_path()).required(true)),
            None => {
                let cwd = Path::new(CWD_CONFIG_FILE);
                if cwd.exists() {
                    builder = builder.add_source(File::from(cwd).required(false));
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("CHAT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags (and their clap-level env fallbacks) win over everything.
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(ttl) = cli.session_ttl_secs {
            builder = builder.set_override("session.ttl_secs", ttl)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }

        builder.build()?.try_deserialize()
    }
}

/// Problems with the provider environment.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("missing required env var: GEMINI_API_KEY (or LLM_API_KEY)")]
    MissingApiKey,

    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("invalid LLM_BASE_URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Load provider settings from the process environment.
pub fn load_llm_settings() -> Result<LlmSettings, SettingsError> {
    load_llm_settings_from(|key| std::env::var(key).ok())
}

/// Load provider settings through an arbitrary variable lookup.
///
/// `LLM_BASE_URL` defaults to the Gemini endpoint and `LLM_MODEL` to
/// `gemini-1.5-flash`. The key is taken from `LLM_API_KEY`, falling back to
/// `GEMINI_API_KEY`; Gemini refuses to run without one.
pub fn load_llm_settings_from<F>(lookup: F) -> Result<LlmSettings, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    let base_url = lookup("LLM_BASE_URL").unwrap_or_else(|| GEMINI_BASE_URL.to_string());
    if base_url.trim().is_empty() {
        return Err(SettingsError::Empty("LLM_BASE_URL"));
    }
    url::Url::parse(&base_url)?;

    let model = lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
    if model.trim().is_empty() {
        return Err(SettingsError::Empty("LLM_MODEL"));
    }

    let api_key = lookup("LLM_API_KEY")
        .or_else(|| lookup("GEMINI_API_KEY"))
        .filter(|s| !s.trim().is_empty());

    // Auto-detect provider from base URL
    let provider = Provider::detect_from_url(&base_url);
    if provider.is_gemini() && api_key.is_none() {
        return Err(SettingsError::MissingApiKey);
    }

    Ok(LlmSettings {
        base_url,
        api_key,
        model,
        provider,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_gemini_defaults() {
        let settings = load_llm_settings_from(lookup(&[("GEMINI_API_KEY", "k")])).unwrap();
        assert_eq!(settings.base_url, GEMINI_BASE_URL);
        assert_eq!(settings.model, "gemini-1.5-flash");
        assert_eq!(settings.provider, Provider::Gemini);
        assert_eq!(settings.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_gemini_requires_key() {
        let err = load_llm_settings_from(lookup(&[])).unwrap_err();
        assert!(matches!(err, SettingsError::MissingApiKey));

        let err = load_llm_settings_from(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, SettingsError::MissingApiKey));
    }

    #[test]
    fn test_generic_provider_without_key() {
        let settings = load_llm_settings_from(lookup(&[
            ("LLM_BASE_URL", "http://localhost:11434"),
            ("LLM_MODEL", "llama3"),
        ]))
        .unwrap();
        assert_eq!(settings.provider, Provider::Generic);
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_llm_api_key_takes_precedence() {
        let settings = load_llm_settings_from(lookup(&[
            ("LLM_API_KEY", "primary"),
            ("GEMINI_API_KEY", "fallback"),
        ]))
        .unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = load_llm_settings_from(lookup(&[
            ("LLM_BASE_URL", "not a url"),
            ("GEMINI_API_KEY", "k"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_empty_model() {
        let err = load_llm_settings_from(lookup(&[("LLM_MODEL", ""), ("GEMINI_API_KEY", "k")]))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Empty("LLM_MODEL")));
    }
}
