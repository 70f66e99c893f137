// src/output/clipboard.rs

//! Best-effort copy of a document to the system clipboard.

use crate::errors::ClipboardError;

/// Something that can receive a copy of the assembled document.
pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard, reached through `arboard`.
///
/// A fresh handle is opened for every copy, so the type holds no state and can
/// be shared by all root pipelines.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    #[cfg(feature = "clipboard")]
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Initialization(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::SetContent(e.to_string()))?;
        Ok(())
    }

    #[cfg(not(feature = "clipboard"))]
    fn copy(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}
