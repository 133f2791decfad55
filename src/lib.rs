//! Gemini Chat
//!
//! A browser chat client for a hosted generative-language model, served by
//! Axum together with a marketing landing page.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server with a stateless proxy endpoint and a
//!   per-page-load chat session API
//! - **LLM**: Provider drivers for Gemini and OpenAI-compatible APIs
//! - **UI**: Server-rendered HTML with small inline scripts
//!
//! # Modules
//!
//! - [`llm`]: LLM driver trait and implementations
//! - [`session`]: In-memory message store
//! - [`chat`]: Optimistic exchange flow with rollback
//! - [`ui`]: Pages and fragments
//! - [`config`]: Layered configuration

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_raw_string_hashes)]

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod server;
pub mod session;
pub mod ui;

use crate::config::AppConfig;

use llm::LlmDriver;
use session::SessionStore;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Driver for the configured model provider.
    pub driver: Arc<dyn LlmDriver>,
    /// Session store for chat histories.
    pub sessions: SessionStore,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
