//! Server-rendered UI.
//!
//! Pages and fragments are plain HTML strings with one inline stylesheet and
//! small inline scripts, so the binary serves everything itself.
//!
//! # Structure
//!
//! - [`landing`]: Marketing landing page
//! - [`chat`]: Chat page composed from the pieces below
//! - [`message`]: Message bubbles, code blocks, message list, typing indicator
//! - [`input`]: Text, voice, image and emoji input
//! - [`settings`]: Settings dialog, theme toggle, language selector
//! - [`components`]: Buttons and icons
//! - [`html`]: Page shell and escaping

pub mod chat;
pub mod components;
pub mod html;
pub mod input;
pub mod landing;
pub mod message;
pub mod script;
pub mod settings;
pub mod style;

pub use chat::chat_page;
pub use landing::landing_page;
pub use message::message_list;
