use anyhow::{Result, bail};

use crate::config::{ConfigManager, resolve_source};
use crate::input::InputReader;
use crate::status;
use crate::translation::{LookupEngine, MatchKind};
use crate::ui::Style;

pub struct TranslateOptions {
    pub text: Option<String>,
    pub from: Option<String>,
    pub json: bool,
}

pub fn run_translate(options: &TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    let source = resolve_source(options.from.as_deref(), &file_config)?;

    let phrases = InputReader::phrases(options.text.as_deref())?;
    if phrases.is_empty() {
        bail!("Error: Input is empty");
    }

    let engine = LookupEngine::default();
    for phrase in &phrases {
        let translation = engine.resolve(phrase, source, source.other());

        if options.json {
            println!("{}", serde_json::to_string(&translation)?);
            continue;
        }

        if let MatchKind::Partial { key } = &translation.kind {
            status!(
                "{} partial match on {}",
                Style::warning("note:"),
                Style::value(format!("\"{key}\""))
            );
        }
        println!("{}", translation.text);
    }

    Ok(())
}
