//! Clipboard helper for copying a cell value to the system clipboard
//!
//! Uses `arboard` for cross-platform support. The clipboard handle is
//! created per copy so nothing is held open between key presses.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails when there is no display server (headless Linux) or access is denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
