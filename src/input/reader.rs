use anyhow::{Context, Result, bail};
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Collects the phrases for a one-shot translation.
pub struct InputReader;

impl InputReader {
    /// Returns `text` as the only phrase, or one phrase per non-blank stdin line.
    pub fn phrases(text: Option<&str>) -> Result<Vec<String>> {
        match text {
            Some(text) => Ok(vec![text.to_string()]),
            None => Self::phrases_from(io::stdin().lock()),
        }
    }

    /// Splits `reader` into non-blank lines, rejecting input over 1 MB.
    pub fn phrases_from(reader: impl Read) -> Result<Vec<String>> {
        let mut buffer = Vec::new();
        // Read one byte past the limit to detect oversized input without buffering it all
        reader
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(
                "Error: Input exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the input into smaller parts."
            );
        }

        let text = String::from_utf8(buffer).context("Input is not valid UTF-8")?;
        Ok(text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases_from_argument() {
        let phrases = InputReader::phrases(Some("  Bonjour ")).unwrap();
        assert_eq!(phrases, vec!["  Bonjour ".to_string()]);
    }

    #[test]
    fn test_phrases_from_reader_skips_blank_lines() {
        let input = "bonjour\n\n   \nmerci\r\nau revoir";
        let phrases = InputReader::phrases_from(input.as_bytes()).unwrap();
        assert_eq!(phrases, vec!["bonjour", "merci", "au revoir"]);
    }

    #[test]
    fn test_phrases_from_reader_unicode() {
        let phrases = InputReader::phrases_from("jërejëf\nñëw\n".as_bytes()).unwrap();
        assert_eq!(phrases, vec!["jërejëf", "ñëw"]);
    }

    #[test]
    fn test_phrases_from_empty_reader() {
        assert!(InputReader::phrases_from(io::empty()).unwrap().is_empty());
    }

    #[test]
    fn test_phrases_at_max_size() {
        let content = "x".repeat(MAX_INPUT_SIZE);
        let phrases = InputReader::phrases_from(content.as_bytes()).unwrap();
        assert_eq!(phrases.len(), 1);
    }

    #[test]
    fn test_phrases_exceeding_max_size() {
        let content = "x".repeat(MAX_INPUT_SIZE + 1);
        let err = InputReader::phrases_from(content.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_phrases_invalid_utf8() {
        let err = InputReader::phrases_from(&[0xff, 0xfe][..]).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }
}
