//! Interactive chat mode for translation sessions.
//!
//! [`ChatController`] holds the per-session state machine and is independent
//! of any terminal; [`ChatSession`] is the REPL around it.

/// Clipboard backends.
pub mod clipboard;
/// Slash command parsing and autocomplete.
pub mod command;
mod controller;
mod conversation;
mod message;
mod session;
mod ui;

pub use controller::{
    ChatController, CopyOutcome, DEFAULT_LATENCY, SessionChange, SessionConfig, SessionObserver,
    Submission,
};
pub use conversation::{Conversation, IgnoreReason, Turn, TurnState};
pub use message::{Clock, GREETING, Message, MessageId, Role, SystemClock};
pub use session::ChatSession;
