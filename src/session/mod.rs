//! Session and message store management.
//!
//! This module provides in-memory storage for chat histories. Every chat page
//! load gets its own [`Session`]; nothing is persisted and a session is
//! discarded on reload, on idle expiry, or when the server stops.
//!
//! # Architecture
//!
//! - [`Message`]: An immutable `{role, content}` entry
//! - [`Session`]: One ordered message sequence
//! - [`SessionStore`]: Thread-safe store for all active sessions
//!
//! # Example
//!
//! ```rust
//! use gemini_chat::session::{Role, SessionStore};
//!
//! let store = SessionStore::new();
//! let session = store.create();
//! session.append_user("Hello!");
//!
//! let messages = session.messages();
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].role(), Role::User);
//! ```

mod message;
mod thread;

pub use message::{Message, Role};
pub use thread::{DEFAULT_SESSION_TIMEOUT, Session, SessionStore};
