//! File helpers for rewriting Markdown documents.

use std::{fs, path::Path};

use tracing::info;

use crate::{options::RenderOptions, process::format_markdown};

/// Rewrite a file in place with its canonical rendering.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, options: &RenderOptions) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    let formatted = format_markdown(&text, options);
    if formatted == text {
        info!(path = %path.display(), "already canonical");
        return Ok(());
    }
    fs::write(path, formatted)?;
    info!(path = %path.display(), "rewrote file");
    Ok(())
}
