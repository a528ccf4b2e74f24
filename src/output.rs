//! Global output configuration and diagnostics.
//!
//! - Translations and transcripts go to stdout
//! - Status lines, errors and logs go to stderr
//! - Quiet mode suppresses status lines and the spinner
//! - Colors can be disabled via flag or the `NO_COLOR` environment variable

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl OutputConfig {
    /// Builds the configuration from CLI flags; `NO_COLOR` forces colors off.
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color: no_color || Self::default().no_color,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }
}

/// Sets the global output configuration. Later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Installs the diagnostic log on stderr.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` for this crate with `verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,jokko_cli=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!is_no_color())
        .try_init();
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}
