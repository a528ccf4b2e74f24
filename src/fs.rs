//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes `content` to `path` through a sibling temp file and a rename,
/// so an interrupted write never leaves a truncated file behind.
///
/// Missing parent directories are created.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/config.toml");

        atomic_write(&path, "[jokko]\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[jokko]\n");
    }

    #[test]
    fn test_atomic_write_overwrites_without_leftovers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "old").unwrap();

        atomic_write(&path, "from = \"wo\"").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "from = \"wo\"");
        assert!(!temp_dir.path().join(".config.toml.tmp").exists());
    }
}
