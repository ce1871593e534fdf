//! File-system helpers for pruning and writing generated files

use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Remove a file or directory tree if it exists.
///
/// Returns `None` when nothing was there, otherwise the number of
/// non-directory entries deleted. Symbolic links are unlinked, not followed.
pub fn remove_path(path: &Path) -> Result<Option<usize>> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to inspect: {}", path.display()))
        }
    };

    if metadata.is_dir() {
        let files = WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| !entry.file_type().is_dir())
            .count();
        std::fs::remove_dir_all(path)
            .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
        Ok(Some(files))
    } else {
        std::fs::remove_file(path)
            .with_context(|| format!("Failed to remove file: {}", path.display()))?;
        Ok(Some(1))
    }
}

/// Write UTF-8 text, creating parent directories and overwriting any existing file
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
