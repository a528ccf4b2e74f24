//! Subcommand implementations.

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Dictionary listing command handler.
pub mod phrases;

/// One-shot translation command handler.
pub mod translate;
