//! Chat page.

use std::time::Duration;

use crate::session::Session;

use super::components::{ButtonSize, ButtonVariant, Icon, button};
use super::html::{html_escape, html_shell};
use super::input::message_input;
use super::message::{message_list, typing_indicator};
use super::script::CHAT_SCRIPT;
use super::settings::settings_dialog;

/// Render the chat page for a session.
///
/// While open, the page pings the session every `heartbeat` so the sweeper
/// keeps it alive.
pub fn chat_page(session: &Session, heartbeat: Duration) -> String {
    let id = html_escape(session.id());
    let heartbeat_ms = heartbeat.as_millis();

    let clear = button(
        ButtonVariant::Outline,
        ButtonSize::Icon,
        "Clear chat",
        "data-clear-chat",
        &Icon::Trash.svg(""),
    );
    let export = format!(
        r#"<a class="btn btn-outline btn-icon" aria-label="Export chat" href="/api/sessions/{id}/export" download="chat-export.txt">{}</a>"#,
        Icon::Download.svg("")
    );

    let content = format!(
        r#"<main class="chat-shell" data-session-id="{id}" data-heartbeat-ms="{heartbeat_ms}">
    <header class="chat-header">
        <h1 class="chat-title">Gemini Chatbot</h1>
        <div class="toolbar">
            {settings}
            {clear}
            {export}
        </div>
    </header>
    <section id="message-list" class="message-list" aria-live="polite" aria-label="Chat messages">{messages}</section>
    {typing}
    {input}
</main>"#,
        settings = settings_dialog(),
        messages = message_list(&session.messages()),
        typing = typing_indicator(),
        input = message_input(),
    );

    html_shell("Gemini Chatbot", &content, &[CHAT_SCRIPT])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;

    #[test]
    fn test_chat_page_wires_session() {
        let session = SessionStore::new().create();
        let page = chat_page(&session, Duration::from_secs(600));
        assert!(page.contains(&format!(r#"data-session-id="{}""#, session.id())));
        assert!(page.contains(&format!("/api/sessions/{}/export", session.id())));
        assert!(page.contains("Gemini Chatbot"));
        assert!(page.contains(r#"id="message-list""#));
        assert!(page.contains(r#"id="typing-indicator""#));
        assert!(page.contains(r#"id="message-form""#));
        assert!(page.contains("data-clear-chat"));
        assert!(page.contains(r#"data-heartbeat-ms="600000""#));
    }
}
