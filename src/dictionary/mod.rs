//! Immutable bidirectional phrase tables.

mod data;
mod store;

pub use store::{Dictionary, PhraseTable, normalize};
