//! Configuration file management.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, JokkoConfig, MAX_LATENCY_MS, ResolveOptions, resolve_config,
    resolve_source,
};
