//! # jokko - French/Wolof phrase translator
//!
//! `jokko` translates short phrases between French and Wolof using a static,
//! bidirectional dictionary, either one phrase at a time or in a chat session.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a phrase
//! jokko bonjour
//!
//! # Translate from Wolof, one phrase per line
//! printf 'jërejëf\nba beneen\n' | jokko --from wo
//!
//! # Interactive chat mode
//! jokko chat
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! use jokko_cli::chat::{ChatController, SessionConfig, Submission};
//! use jokko_cli::translation::LookupEngine;
//!
//! # async fn demo() {
//! let mut chat = ChatController::new(LookupEngine::default(), &SessionConfig::default());
//! if let Submission::Accepted(_) = chat.submit("merci") {
//!     chat.wait_for_reply().await;
//! }
//! assert_eq!(chat.conversation().len(), 3);
//! # }
//! ```
//!
//! ## Configuration
//!
//! Defaults are read from `~/.config/jokko/config.toml`:
//!
//! ```toml
//! [jokko]
//! from = "fr"
//! latency_ms = 1000
//! clipboard = true
//! ```

/// Interactive chat mode: conversation state, controller and REPL.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Immutable phrase tables.
pub mod dictionary;

/// File system utilities.
pub mod fs;

/// Input reading from arguments and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, diagnostics).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Languages, directions and the lookup engine.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
