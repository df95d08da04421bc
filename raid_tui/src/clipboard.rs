//! Clipboard access for share text and links

use arboard::Clipboard;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("system clipboard is unavailable")]
    SystemUnavailable,
    #[error("failed to write to clipboard")]
    WriteError,
    #[error("nothing to copy yet")]
    Empty,
}

pub type ClipboardResult = Result<(), ClipboardError>;

/// Destination for copied text
pub trait ClipboardBackend {
    fn copy(&mut self, text: &str) -> ClipboardResult;
}

/// The operating system clipboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn copy(&mut self, text: &str) -> ClipboardResult {
        let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

        clipboard
            .set_text(text)
            .map_err(|_| ClipboardError::WriteError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_returns_result() {
        let result = SystemClipboard.copy("test");
        assert!(result.is_ok() || matches!(result, Err(ClipboardError::SystemUnavailable) | Err(ClipboardError::WriteError)));
    }
}
