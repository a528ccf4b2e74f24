#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use std::time::Duration;

use jokko_cli::chat::DEFAULT_LATENCY;
use jokko_cli::config::{ConfigFile, JokkoConfig, ResolveOptions, resolve_config};
use jokko_cli::translation::Direction;

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        jokko: JokkoConfig {
            from: Some("wo".to_string()),
            latency_ms: Some(200),
            clipboard: Some(false),
        },
    }
}

#[test]
fn test_builtin_defaults_without_config() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.direction, Direction::FRENCH_TO_WOLOF);
    assert_eq!(resolved.latency, DEFAULT_LATENCY);
    assert!(resolved.clipboard);
}

#[test]
fn test_config_used_when_cli_not_specified() {
    let resolved =
        resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.direction, Direction::WOLOF_TO_FRENCH);
    assert_eq!(resolved.latency, Duration::from_millis(200));
    assert!(!resolved.clipboard);
}

#[test]
fn test_cli_from_overrides_config_from() {
    let options = ResolveOptions {
        from: Some("fr".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.direction, Direction::FRENCH_TO_WOLOF);
    // Untouched settings still come from the file
    assert_eq!(resolved.latency, Duration::from_millis(200));
}

#[test]
fn test_cli_latency_overrides_config_latency() {
    let options = ResolveOptions {
        latency_ms: Some(5),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.latency, Duration::from_millis(5));
}

#[test]
fn test_no_clipboard_flag_beats_config() {
    let mut config = make_config_with_defaults();
    config.jokko.clipboard = Some(true);
    let options = ResolveOptions {
        no_clipboard: true,
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert!(!resolved.clipboard);
}

#[test]
fn test_invalid_cli_language_returns_error() {
    let options = ResolveOptions {
        from: Some("de".to_string()),
        ..ResolveOptions::default()
    };

    assert!(resolve_config(&options, &make_config_with_defaults()).is_err());
}

#[test]
fn test_latency_above_cap_is_rejected() {
    let options = ResolveOptions {
        latency_ms: Some(60_000),
        ..ResolveOptions::default()
    };

    let err = resolve_config(&options, &ConfigFile::default()).unwrap_err();

    assert!(err.to_string().contains("60000 ms"));
}
