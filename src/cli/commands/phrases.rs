use anyhow::Result;

use crate::config::{ConfigManager, resolve_source};
use crate::dictionary::Dictionary;
use crate::translation::Direction;
use crate::ui::Style;

/// Prints the phrase table of one direction in dictionary order.
pub fn print_phrases(from: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    let direction = Direction::from_source(resolve_source(from, &file_config)?);

    let dictionary = Dictionary::shared();
    let entries: Vec<_> = dictionary.entries(direction).collect();
    let width = entries
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    println!(
        "{} {}",
        Style::header(direction),
        Style::secondary(format!("({} phrases)", entries.len()))
    );
    for (key, value) in entries {
        let padding = " ".repeat(width - key.chars().count());
        println!("  {}{padding}  {}", Style::value(key), value);
    }

    Ok(())
}
