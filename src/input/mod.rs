//! Input for one-shot translations.

mod reader;

pub use reader::InputReader;
