use anyhow::Result;

use crate::chat::ChatSession;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::translation::LookupEngine;

pub struct ChatOptions {
    pub from: Option<String>,
    pub latency_ms: Option<u64>,
    pub no_clipboard: bool,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    let resolve_options = ResolveOptions {
        from: options.from,
        latency_ms: options.latency_ms,
        no_clipboard: options.no_clipboard,
    };
    let config = resolve_config(&resolve_options, &file_config)?;
    tracing::debug!(?config, "starting chat session");

    let mut session = ChatSession::new(LookupEngine::default(), config);
    session.run().await
}
