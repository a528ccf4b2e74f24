mod language;
mod lookup;

pub use language::{
    Direction, Language, LanguageError, SUPPORTED_LANGUAGES, print_languages, validate_language,
};
pub use lookup::{LookupEngine, MatchKind, Translation, fallback_message};
