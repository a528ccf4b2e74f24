//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{Confirm, CustomType, Select};

use crate::config::{ConfigFile, ConfigManager, JokkoConfig, MAX_LATENCY_MS};
use crate::status;
use crate::translation::{Language, SUPPORTED_LANGUAGES};
use crate::ui::{Style, handle_prompt_cancellation};

const DEFAULT_LATENCY_MS: u64 = 1000;

/// Runs the configure command.
///
/// With `show`, prints the current defaults; otherwise edits them interactively.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    if show {
        let config = manager.load_or_default()?;
        print_current_defaults(&config, &manager);
        return Ok(());
    }
    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;
    print_current_defaults(&config, manager);

    let from = select_source_language(config.jokko.from.as_deref())?;
    let latency_ms = prompt_latency(config.jokko.latency_ms)?;
    let clipboard = Confirm::new("Use the system clipboard for /copy?")
        .with_default(config.jokko.clipboard.unwrap_or(true))
        .prompt()?;

    config.jokko = JokkoConfig {
        from: Some(from.code().to_string()),
        latency_ms: Some(latency_ms),
        clipboard: Some(clipboard),
    };
    manager.save(&config)?;

    status!();
    status!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile, manager: &ConfigManager) {
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}        {}",
        Style::label("from"),
        config.jokko.from.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("latency_ms"),
        config.jokko.latency_ms.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("clipboard"),
        config.jokko.clipboard.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}        {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!();
}

fn select_source_language(current: Option<&str>) -> Result<Language> {
    let start = current
        .and_then(|code| SUPPORTED_LANGUAGES.iter().position(|l| l.code() == code))
        .unwrap_or(0);

    Ok(
        Select::new("Default source language:", SUPPORTED_LANGUAGES.to_vec())
            .with_starting_cursor(start)
            .prompt()?,
    )
}

fn prompt_latency(current: Option<u64>) -> Result<u64> {
    Ok(CustomType::<u64>::new("Translation latency (ms):")
        .with_default(current.unwrap_or(DEFAULT_LATENCY_MS))
        .with_error_message("Please enter a whole number of milliseconds")
        .with_validator(|ms: &u64| {
            if *ms <= MAX_LATENCY_MS {
                Ok(inquire::validator::Validation::Valid)
            } else {
                Ok(inquire::validator::Validation::Invalid(
                    format!("At most {MAX_LATENCY_MS} ms").into(),
                ))
            }
        })
        .prompt()?)
}
