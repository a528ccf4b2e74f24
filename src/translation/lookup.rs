use serde::Serialize;
use std::sync::Arc;

use crate::dictionary::{Dictionary, normalize};

use super::{Direction, Language};

/// Builds the reply shown when no dictionary entry matches.
///
/// `text` is embedded verbatim, before normalization.
pub fn fallback_message(text: &str) -> String {
    format!("Traduction non disponible pour \"{text}\". Ajout en cours au dictionnaire...")
}

/// How a translation was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    /// First table entry overlapping the input; `key` is that entry's source phrase.
    Partial { key: String },
    Fallback,
}

/// Result of resolving a phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub input: String,
    pub direction: Direction,
    pub text: String,
    #[serde(rename = "match")]
    pub kind: MatchKind,
}

/// Resolves phrases against a shared dictionary. Never fails.
#[derive(Debug, Clone)]
pub struct LookupEngine {
    dictionary: Arc<Dictionary>,
}

impl LookupEngine {
    pub const fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Translates `text` from `source` to `target`, always returning displayable text.
    pub fn translate(&self, text: &str, source: Language, target: Language) -> String {
        self.resolve(text, source, target).text
    }

    /// Like [`translate`](Self::translate), but also reports how the result was found.
    ///
    /// Exact match first, then the first entry (in table order) whose key is
    /// contained in the input or contains it, then the fallback message.
    pub fn resolve(&self, text: &str, source: Language, target: Language) -> Translation {
        let direction = Direction::new(source, target);
        let normalized = normalize(text);

        let (translated, kind) = if let Some(found) = self.dictionary.lookup(direction, &normalized)
        {
            (found.to_string(), MatchKind::Exact)
        } else if let Some((key, value)) = self
            .dictionary
            .entries(direction)
            .find(|(key, _)| normalized.contains(key) || key.contains(normalized.as_str()))
        {
            (
                value.to_string(),
                MatchKind::Partial {
                    key: key.to_string(),
                },
            )
        } else {
            (fallback_message(text), MatchKind::Fallback)
        };

        tracing::debug!(direction = %direction.key(), input = %text, ?kind, "resolved phrase");

        Translation {
            input: text.to_string(),
            direction,
            text: translated,
            kind,
        }
    }
}

impl Default for LookupEngine {
    fn default() -> Self {
        Self::new(Dictionary::shared())
    }
}
