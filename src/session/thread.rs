//! Message sequence and session storage.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, MutexGuard};
use tokio::time::Instant;
use uuid::Uuid;

use super::message::{Message, Role};

/// Default session timeout (30 minutes).
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// A single chat session.
///
/// Holds the ordered message history of one chat page load. Cloning a
/// session is cheap and yields a handle to the same history.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    /// Unique session identifier.
    id: String,
    /// Conversation messages.
    messages: RwLock<Vec<Message>>,
    /// Session creation time.
    created_at: DateTime<Utc>,
    /// Last activity time.
    last_activity: RwLock<Instant>,
    /// Serializes exchanges so a rollback never races another send.
    exchange: Mutex<()>,
}

impl Session {
    /// Create a new session with the given ID.
    fn new(id: String) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                id,
                messages: RwLock::new(Vec::new()),
                created_at: Utc::now(),
                last_activity: RwLock::new(Instant::now()),
                exchange: Mutex::new(()),
            }),
        }
    }

    /// Get the session ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Append a user message and return it.
    pub fn append_user(&self, content: impl Into<String>) -> Message {
        self.append(Message::new(Role::User, content))
    }

    /// Append a bot message and return it.
    pub fn append_bot(&self, content: impl Into<String>) -> Message {
        self.append(Message::new(Role::Bot, content))
    }

    fn append(&self, message: Message) -> Message {
        write(&self.inner.messages).push(message.clone());
        self.touch();
        message
    }

    /// Remove the message with the given ID, if present.
    pub fn remove(&self, id: Uuid) -> Option<Message> {
        let mut guard = write(&self.inner.messages);
        let pos = guard.iter().position(|m| m.id() == id)?;
        let removed = guard.remove(pos);
        drop(guard);
        self.touch();
        Some(removed)
    }

    /// Get all messages in the conversation.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        read(&self.inner.messages).clone()
    }

    /// Get the number of messages in the conversation.
    #[must_use]
    pub fn len(&self) -> usize {
        read(&self.inner.messages).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all messages from the session.
    pub fn clear(&self) {
        write(&self.inner.messages).clear();
        self.touch();
    }

    /// Render the history as plain text.
    ///
    /// Each message becomes `role: content`; messages are separated by a
    /// blank line and appear in their original order.
    #[must_use]
    pub fn export_text(&self) -> String {
        read(&self.inner.messages)
            .iter()
            .map(Message::export_line)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Wait for exclusive use of the session's exchange slot.
    pub(crate) async fn lock_exchange(&self) -> MutexGuard<'_, ()> {
        self.inner.exchange.lock().await
    }

    /// Mark the session as in use, postponing its expiry.
    pub fn touch(&self) {
        *write(&self.inner.last_activity) = Instant::now();
    }

    /// Check if the session has been idle longer than `timeout`.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        read(&self.inner.last_activity).elapsed() > timeout
    }

    /// When the session was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }
}

/// Thread-safe store for sessions.
///
/// Provides methods for creating, retrieving, and cleaning up sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Create a new session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session and return it.
    #[must_use]
    pub fn create(&self) -> Session {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone());
        write(&self.inner).insert(id, session.clone());
        session
    }

    /// Get a session by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Session> {
        read(&self.inner).get(id).cloned()
    }

    /// Remove a session by ID.
    pub fn remove(&self, id: &str) -> Option<Session> {
        write(&self.inner).remove(id)
    }

    /// Get the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        read(&self.inner).len()
    }

    /// Check if there are no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove sessions that have been inactive longer than the timeout.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = write(&self.inner);
        let before = guard.len();
        guard.retain(|_, session| !session.is_expired_with_timeout(timeout));
        before - guard.len()
    }

    /// List all session IDs.
    #[must_use]
    pub fn list_ids(&self) -> Vec<String> {
        read(&self.inner).keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let session = Session::new("test-123".to_string());

        assert_eq!(session.id(), "test-123");
        assert!(session.is_empty());

        session.append_user("Hello");
        assert_eq!(session.len(), 1);

        session.append_bot("Hi there!");
        assert_eq!(session.len(), 2);

        let messages = session.messages();
        assert_eq!(messages[0].role(), Role::User);
        assert_eq!(messages[1].role(), Role::Bot);
    }

    #[test]
    fn test_remove_by_id_leaves_others() {
        let session = Session::new("s".to_string());
        let first = session.append_user("one");
        let second = session.append_user("two");
        let third = session.append_bot("three");

        let removed = session.remove(second.id()).unwrap();
        assert_eq!(removed.content(), "two");

        let ids: Vec<_> = session.messages().iter().map(Message::id).collect();
        assert_eq!(ids, vec![first.id(), third.id()]);

        assert!(session.remove(second.id()).is_none());
    }

    #[test]
    fn test_clear_empties_history() {
        let session = Session::new("s".to_string());
        session.append_user("a");
        session.append_bot("b");
        session.clear();
        assert!(session.is_empty());

        session.clear();
        assert!(session.is_empty());
    }

    #[test]
    fn test_export_text_order_and_format() {
        let session = Session::new("s".to_string());
        session.append_user("What is Rust?");
        session.append_bot("A systems language.");
        session.append_user("Thanks");

        assert_eq!(
            session.export_text(),
            "user: What is Rust?\n\nbot: A systems language.\n\nuser: Thanks"
        );
    }

    #[test]
    fn test_export_empty() {
        let session = Session::new("s".to_string());
        assert_eq!(session.export_text(), "");
    }

    #[test]
    fn test_clones_share_history() {
        let session = Session::new("s".to_string());
        let handle = session.clone();
        handle.append_user("shared");
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_session_store() {
        let store = SessionStore::new();

        assert!(store.is_empty());

        let session = store.create();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list_ids(), vec![session.id().to_string()]);

        let retrieved = store.get(session.id()).unwrap();
        assert_eq!(retrieved.id(), session.id());

        store.remove(session.id());
        assert!(store.is_empty());
        assert!(store.get(session.id()).is_none());
    }

    #[test]
    fn test_cleanup_expired() {
        let store = SessionStore::new();
        let _a = store.create();
        let _b = store.create();

        assert_eq!(store.cleanup_expired_with_timeout(DEFAULT_SESSION_TIMEOUT), 0);
        assert_eq!(store.len(), 2);

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(store.cleanup_expired_with_timeout(Duration::ZERO), 2);
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_touch_postpones_expiry() {
        let session = Session::new("s".to_string());
        let ttl = Duration::from_secs(60);

        tokio::time::advance(Duration::from_secs(45)).await;
        assert!(!session.is_expired_with_timeout(ttl));
        session.touch();

        tokio::time::advance(Duration::from_secs(45)).await;
        assert!(!session.is_expired_with_timeout(ttl));

        tokio::time::advance(Duration::from_secs(16)).await;
        assert!(session.is_expired_with_timeout(ttl));
    }
}
