//! Clipboard access for copying replies.

use anyhow::{Result, anyhow, bail};
use cli_clipboard::{ClipboardContext, ClipboardProvider};

/// A place replies can be copied to.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The platform clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut ctx =
            ClipboardContext::new().map_err(|e| anyhow!("Failed to open clipboard: {e}"))?;
        ctx.set_contents(text.to_string())
            .map_err(|e| anyhow!("Failed to write to clipboard: {e}"))
    }
}

/// Used when clipboard access is turned off; every write fails.
#[derive(Debug, Default)]
pub struct DisabledClipboard;

impl Clipboard for DisabledClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        bail!("Clipboard is disabled")
    }
}
