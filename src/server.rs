use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::chat::{self, Exchange};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::llm::{LlmSettings, build_driver};
use crate::session::{Message, Session, SessionStore};
use crate::ui;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>, settings: LlmSettings) -> anyhow::Result<()> {
    info!(
        name: "llm.config.loaded",
        base_url = %settings.base_url,
        model = %settings.model,
        provider = %settings.provider,
        "LLM configuration loaded"
    );

    let state = AppState {
        driver: build_driver(settings),
        sessions: SessionStore::new(),
        config: Arc::clone(&config),
    };

    let _sweeper = spawn_session_sweeper(
        state.sessions.clone(),
        Duration::from_secs(config.session.ttl_secs),
        Duration::from_secs(config.session.sweep_interval_secs),
    );

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let resilience = &state.config.resilience;

    // A disabled timeout is a very long one, which keeps the layer stack's
    // type identical either way.
    let timeout_duration = if resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60)
    } else {
        Duration::from_secs(resilience.request_timeout_secs)
    };
    let body_limit = resilience.body_limit_bytes;

    Router::new()
        // HTML pages
        .route("/", get(landing_handler))
        .route("/chatbot", get(chatbot_handler))
        .route("/chatbot/{id}/messages", get(message_list_fragment))
        // API routes
        .route("/api/chat", post(api_chat))
        .route(
            "/api/sessions/{id}/messages",
            get(api_get_messages)
                .post(api_send_message)
                .delete(api_clear_messages),
        )
        .route("/api/sessions/{id}/export", get(api_export))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                let path = req.uri().path().to_owned();
                match tokio::time::timeout(timeout_duration, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => ApiError::Timeout {
                        path,
                        after: timeout_duration,
                    }
                    .into_response(),
                }
            },
        ))
        .with_state(state)
}

/// Periodically drop sessions idle for longer than `ttl`.
pub fn spawn_session_sweeper(
    sessions: SessionStore,
    ttl: Duration,
    every: Duration,
) -> JoinHandle<()> {
    let every = every.max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let removed = sessions.cleanup_expired_with_timeout(ttl);
            if removed > 0 {
                info!(
                    name: "session.swept",
                    removed,
                    remaining = sessions.len(),
                    "Expired sessions removed"
                );
            }
        }
    })
}

/// Look up a session and mark it as in use.
fn find_session(state: &AppState, id: &str) -> Result<Session, ApiError> {
    let session = state
        .sessions
        .get(id)
        .ok_or_else(|| ApiError::SessionNotFound(id.to_string()))?;
    session.touch();
    Ok(session)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Landing page.
async fn landing_handler() -> impl IntoResponse {
    Html(ui::landing_page())
}

/// GET /chatbot - Chat page; every load starts a fresh session.
async fn chatbot_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.sessions.create();
    info!(
        name: "session.created",
        session_id = %session.id(),
        created_at = %session.created_at(),
        active = state.sessions.len(),
        "Chat session created"
    );
    let heartbeat =
        Duration::from_secs(state.config.session.ttl_secs / 3).max(Duration::from_secs(1));
    Html(ui::chat_page(&session, heartbeat))
}

/// GET /chatbot/:id/messages - Message list fragment.
async fn message_list_fragment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let session = find_session(&state, &id)?;
    Ok(Html(ui::message_list(&session.messages())))
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for chat API.
#[derive(Debug, Deserialize)]
struct ChatRequest {
    /// User message content.
    message: String,
}

/// Response from the proxy endpoint.
#[derive(Debug, Serialize)]
struct ChatResponse {
    /// Generated text.
    message: String,
}

/// POST /api/chat - Forward a message to the model and return its reply.
async fn api_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    info!(chars = req.message.chars().count(), "Received chat request");
    let message = chat::proxy(state.driver.as_ref(), &req.message).await?;
    Ok(Json(ChatResponse { message }))
}

/// GET /api/sessions/:id/messages - Session history.
async fn api_get_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let session = find_session(&state, &id)?;
    Ok(Json(session.messages()))
}

/// POST /api/sessions/:id/messages - Run one exchange.
async fn api_send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<Exchange>, ApiError> {
    let session = find_session(&state, &id)?;
    let exchange = chat::exchange(&session, state.driver.as_ref(), &req.message).await?;
    Ok(Json(exchange))
}

/// DELETE /api/sessions/:id/messages - Clear history.
async fn api_clear_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let session = find_session(&state, &id)?;
    session.clear();
    info!(name: "session.cleared", session_id = %id, "Chat history cleared");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/sessions/:id/export - History as a plain-text download.
async fn api_export(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session = find_session(&state, &id)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"chat-export.txt\"",
            ),
        ],
        session.export_text(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_evicts_idle_sessions_only() {
        let sessions = SessionStore::new();
        let idle = sessions.create();
        let active = sessions.create();

        let sweeper = spawn_session_sweeper(
            sessions.clone(),
            Duration::from_secs(60),
            Duration::from_secs(10),
        );

        for _ in 0..9 {
            tokio::time::sleep(Duration::from_secs(10)).await;
            active.touch();
        }

        assert!(sessions.get(idle.id()).is_none());
        assert!(sessions.get(active.id()).is_some());
        assert_eq!(sessions.len(), 1);

        sweeper.abort();
    }
}
