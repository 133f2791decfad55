//! Chat exchange flow.
//!
//! An exchange optimistically appends the user's message, asks the model for
//! a reply, then either appends the reply or removes the user's message so
//! the history looks as if the attempt never happened.
//!
//! Exchanges on one session run one at a time: a second send waits until the
//! first has committed or rolled back.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::llm::{LlmDriver, LlmError};
use crate::session::{Message, Session};

/// Errors from the exchange flow.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Nothing but whitespace was submitted.
    #[error("message is empty")]
    EmptyMessage,

    /// The model call failed; the user message was rolled back.
    #[error("model request failed: {0}")]
    Upstream(#[from] LlmError),
}

/// A committed exchange: the user's message and the bot's reply.
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    pub user: Message,
    pub bot: Message,
}

/// Run one exchange against `session`.
pub async fn exchange(
    session: &Session,
    driver: &dyn LlmDriver,
    text: &str,
) -> Result<Exchange, ChatError> {
    if text.trim().is_empty() {
        return Err(ChatError::EmptyMessage);
    }

    let _slot = session.lock_exchange().await;

    let user = session.append_user(text);
    let pending = Pending {
        session,
        user: Some(user.id()),
    };

    match driver.generate(text).await {
        Ok(reply) => {
            pending.commit();
            let bot = session.append_bot(reply);
            info!(
                name: "chat.exchange.committed",
                session_id = %session.id(),
                messages = session.len(),
                "Exchange committed"
            );
            Ok(Exchange { user, bot })
        }
        Err(e) => {
            drop(pending);
            warn!(
                name: "chat.exchange.rolled_back",
                session_id = %session.id(),
                error = %e,
                "Exchange rolled back"
            );
            Err(e.into())
        }
    }
}

/// An optimistic user message awaiting its reply.
///
/// Dropping it without [`Pending::commit`] removes the message, so an
/// exchange whose future is cancelled (request timeout, client disconnect)
/// still leaves the history as it was.
struct Pending<'a> {
    session: &'a Session,
    user: Option<Uuid>,
}

impl Pending<'_> {
    fn commit(mut self) {
        self.user = None;
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        if let Some(id) = self.user.take() {
            self.session.remove(id);
            debug!(
                name: "chat.exchange.discarded",
                session_id = %self.session.id(),
                message_id = %id,
                "Optimistic message removed"
            );
        }
    }
}

/// Forward `text` to the model with no session bookkeeping.
pub async fn proxy(driver: &dyn LlmDriver, text: &str) -> Result<String, LlmError> {
    driver.generate(text).await
}
