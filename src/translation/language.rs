//! Supported languages and translation directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ui::Style;

/// A language the dictionary knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "wo")]
    Wolof,
}

/// All supported languages, in display order.
pub const SUPPORTED_LANGUAGES: &[Language] = &[Language::French, Language::Wolof];

impl Language {
    /// ISO 639-1 code (`fr`, `wo`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::Wolof => "wo",
        }
    }

    /// Endonym shown next to messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::French => "Français",
            Self::Wolof => "Wolof",
        }
    }

    pub const fn flag(self) -> &'static str {
        match self {
            Self::French => "🇫🇷",
            Self::Wolof => "🇸🇳",
        }
    }

    /// Lowercase name used in prompts ("Tapez votre texte en français...").
    pub const fn adjective(self) -> &'static str {
        match self {
            Self::French => "français",
            Self::Wolof => "wolof",
        }
    }

    /// The other language of the pair.
    pub const fn other(self) -> Self {
        match self {
            Self::French => Self::Wolof,
            Self::Wolof => Self::French,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag(), self.name())
    }
}

/// Error returned when a language code is not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageError(String);

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<_> = SUPPORTED_LANGUAGES.iter().map(|l| l.code()).collect();
        write!(
            f,
            "Invalid language code: '{}'\n\nValid language codes: {}\nRun 'jokko languages' to see them.",
            self.0,
            codes.join(", ")
        )
    }
}

impl std::error::Error for LanguageError {}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|l| l.code() == s)
            .ok_or_else(|| LanguageError(s.to_string()))
    }
}

/// An ordered language pair selecting which dictionary table to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub source: Language,
    pub target: Language,
}

impl Direction {
    pub const FRENCH_TO_WOLOF: Self = Self::new(Language::French, Language::Wolof);
    pub const WOLOF_TO_FRENCH: Self = Self::new(Language::Wolof, Language::French);

    pub const fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }

    /// The direction translating out of `source` into the other language.
    pub const fn from_source(source: Language) -> Self {
        Self::new(source, source.other())
    }

    /// Swaps source and target.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.target, self.source)
    }

    /// Table key such as `fr-wo`.
    pub fn key(self) -> String {
        format!("{}-{}", self.source.code(), self.target.code())
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::FRENCH_TO_WOLOF
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.source, self.target)
    }
}

/// Prints the supported languages and directions to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for lang in SUPPORTED_LANGUAGES {
        println!("  {:3} {}", Style::code(lang.code()), Style::secondary(lang));
    }
    println!();
    println!("{}", Style::header("Directions"));
    for lang in SUPPORTED_LANGUAGES {
        let direction = Direction::from_source(*lang);
        println!(
            "  {}  {}",
            Style::code(direction.key()),
            Style::secondary(direction)
        );
    }
}

/// Parses and validates a language code.
///
/// # Errors
///
/// Returns an error if the code is not one of the supported languages.
pub fn validate_language(code: &str) -> Result<Language, LanguageError> {
    code.parse()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_valid() {
        assert_eq!(validate_language("fr"), Ok(Language::French));
        assert_eq!(validate_language("wo"), Ok(Language::Wolof));
    }

    #[test]
    fn test_validate_language_invalid() {
        assert!(validate_language("en").is_err());
        assert!(validate_language("").is_err());
        assert!(validate_language("FR").is_err()); // Case sensitive
    }

    #[test]
    fn test_language_error_lists_codes() {
        let err = validate_language("xx").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'xx'"));
        assert!(msg.contains("fr, wo"));
    }

    #[test]
    fn test_direction_key() {
        assert_eq!(Direction::FRENCH_TO_WOLOF.key(), "fr-wo");
        assert_eq!(Direction::WOLOF_TO_FRENCH.key(), "wo-fr");
    }

    #[test]
    fn test_direction_reversed_is_involution() {
        let d = Direction::FRENCH_TO_WOLOF;
        assert_eq!(d.reversed(), Direction::WOLOF_TO_FRENCH);
        assert_eq!(d.reversed().reversed(), d);
    }

    #[test]
    fn test_direction_from_source() {
        assert_eq!(
            Direction::from_source(Language::Wolof),
            Direction::WOLOF_TO_FRENCH
        );
    }

    #[test]
    fn test_language_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Wolof).unwrap();
        assert_eq!(json, "\"wo\"");
        let parsed: Language = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(parsed, Language::French);
    }
}
