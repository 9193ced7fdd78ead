// src/clipboard/mod.rs
use thiserror::Error;

use crate::core::DisplayField;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Write-only access to a clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

// System clipboard, opened on first write and kept for the life of the form
// so the copied text stays owned by this process.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not initialized".into()))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// Selects the displayed password, then writes `password` to the clipboard.
///
/// The selection is only a visual cue; the clipboard always receives
/// `password` as given.
pub fn copy_to_clipboard(
    field: &mut DisplayField,
    clipboard: &mut dyn Clipboard,
    password: &str,
) -> Result<()> {
    field.select_all();

    match clipboard.write_text(password) {
        Ok(()) => {
            log::info!("Copied password ({} characters) to clipboard", password.len());
            Ok(())
        }
        Err(e) => {
            log::warn!("Failed to copy password to clipboard: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    #[derive(Default)]
    pub struct MemoryClipboard {
        pub writes: Vec<String>,
    }

    impl MemoryClipboard {
        pub fn contents(&self) -> Option<&str> {
            self.writes.last().map(String::as_str)
        }
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    pub struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(ClipboardError::WriteFailed("permission denied".into()))
        }
    }
}
