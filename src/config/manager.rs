use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::chat::{DEFAULT_LATENCY, SessionConfig};
use crate::fs::atomic_write;
use crate::paths;
use crate::translation::{Direction, Language, validate_language};

/// Largest accepted artificial latency.
pub const MAX_LATENCY_MS: u64 = 10_000;

/// Default settings in the `[jokko]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokkoConfig {
    /// Default source language code (`fr` or `wo`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Artificial translation latency in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    /// Whether `/copy` may use the system clipboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clipboard: Option<bool>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/jokko/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub jokko: JokkoConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub latency_ms: Option<u64>,
    /// `--no-clipboard` was given.
    pub no_clipboard: bool,
}

/// Resolves the source language alone: CLI, then config file, then French.
pub fn resolve_source(from: Option<&str>, config_file: &ConfigFile) -> Result<Language> {
    let Some(code) = from.or(config_file.jokko.from.as_deref()) else {
        return Ok(Language::French);
    };
    Ok(validate_language(code)?)
}

/// Merges CLI options with config file settings into a session configuration.
///
/// Priority: CLI options, then the config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error for an unknown language code or a latency above
/// [`MAX_LATENCY_MS`].
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<SessionConfig> {
    let source = resolve_source(options.from.as_deref(), config_file)?;

    let latency = match options.latency_ms.or(config_file.jokko.latency_ms) {
        Some(ms) if ms > MAX_LATENCY_MS => bail!(
            "Invalid latency: {ms} ms\n\n\
             The latency must be at most {MAX_LATENCY_MS} ms."
        ),
        Some(ms) => Duration::from_millis(ms),
        None => DEFAULT_LATENCY,
    };

    let clipboard = !options.no_clipboard && config_file.jokko.clipboard.unwrap_or(true);

    Ok(SessionConfig::new(
        Direction::from_source(source),
        latency,
        clipboard,
    ))
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Uses `$XDG_CONFIG_HOME/jokko/config.toml` or `~/.config/jokko/config.toml`.
    pub fn new() -> Result<Self> {
        Ok(Self::at(paths::config_dir()?.join("config.toml")))
    }

    pub fn at(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        atomic_write(&self.config_path, &contents)
    }
}
