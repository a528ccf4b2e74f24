use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::data;
use crate::translation::Direction;

static BUILTIN: OnceLock<Arc<Dictionary>> = OnceLock::new();

/// Normalizes a phrase for lookup: trims surrounding whitespace and lowercases.
///
/// Diacritics are kept as-is, so `"École"` becomes `"école"`, not `"ecole"`.
pub fn normalize(phrase: &str) -> String {
    phrase.trim().to_lowercase()
}

/// One direction's phrases, keyed by normalized source phrase.
///
/// Iteration follows the order in which entries were authored.
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl PhraseTable {
    /// Builds a table from `(source, target)` pairs.
    ///
    /// A key repeated after normalization keeps its first position and takes
    /// the last value.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::default();
        for (key, value) in pairs {
            let key = normalize(key.as_ref());
            let value = value.into();
            if let Some(&pos) = table.index.get(&key) {
                table.entries[pos].1 = value;
            } else {
                table.index.insert(key.clone(), table.entries.len());
                table.entries.push((key, value));
            }
        }
        table
    }

    /// Exact match on an already-normalized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read-only bidirectional phrase store.
///
/// There is no mutation surface; share it with `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    tables: HashMap<Direction, PhraseTable>,
}

impl Dictionary {
    pub fn new(tables: impl IntoIterator<Item = (Direction, PhraseTable)>) -> Self {
        Self {
            tables: tables.into_iter().collect(),
        }
    }

    /// The built-in French/Wolof dictionary.
    pub fn builtin() -> Self {
        Self::new([
            (
                Direction::FRENCH_TO_WOLOF,
                PhraseTable::from_pairs(data::FRENCH_TO_WOLOF.iter().copied()),
            ),
            (
                Direction::WOLOF_TO_FRENCH,
                PhraseTable::from_pairs(data::WOLOF_TO_FRENCH.iter().copied()),
            ),
        ])
    }

    /// Process-wide handle to the built-in dictionary, built on first use.
    pub fn shared() -> Arc<Self> {
        Arc::clone(BUILTIN.get_or_init(|| Arc::new(Self::builtin())))
    }

    /// Exact-match lookup of `phrase` (normalized first) in `direction`'s table.
    pub fn lookup(&self, direction: Direction, phrase: &str) -> Option<&str> {
        self.table(direction)?.get(&normalize(phrase))
    }

    pub fn table(&self, direction: Direction) -> Option<&PhraseTable> {
        self.tables.get(&direction)
    }

    /// Entries of `direction`'s table in authored order; empty if there is no such table.
    pub fn entries(&self, direction: Direction) -> impl Iterator<Item = (&str, &str)> {
        self.table(direction).into_iter().flat_map(PhraseTable::iter)
    }

    /// Directions that have a table, sorted by key.
    pub fn directions(&self) -> Vec<Direction> {
        let mut directions: Vec<_> = self.tables.keys().copied().collect();
        directions.sort_by_key(|d| d.key());
        directions
    }
}
