//! XDG-style path resolution for the configuration directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "jokko";

/// Returns the configuration directory.
///
/// `$XDG_CONFIG_HOME/jokko` when `XDG_CONFIG_HOME` is set and non-empty,
/// `~/.config/jokko` otherwise.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_xdg<F: FnOnce()>(value: Option<&str>, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        match value {
            // SAFETY: env mutation is serialized across tests with #[serial]
            Some(v) => unsafe { std::env::set_var("XDG_CONFIG_HOME", v) },
            None => unsafe { std::env::remove_var("XDG_CONFIG_HOME") },
        }

        f();

        match original {
            Some(v) => unsafe { std::env::set_var("XDG_CONFIG_HOME", v) },
            None => unsafe { std::env::remove_var("XDG_CONFIG_HOME") },
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        with_xdg(None, || {
            assert!(config_dir().unwrap().ends_with(".config/jokko"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        with_xdg(Some("/custom/config"), || {
            assert_eq!(config_dir().unwrap(), PathBuf::from("/custom/config/jokko"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_ignores_empty_xdg() {
        with_xdg(Some(""), || {
            assert!(config_dir().unwrap().ends_with(".config/jokko"));
        });
    }
}
