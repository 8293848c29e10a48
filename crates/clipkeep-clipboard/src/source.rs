//! Clipboard source/sink traits and the arboard-backed implementation.
//!
//! The traits are the seam between the engine and the platform: the real
//! watcher runs on [`SystemClipboard`], tests run on a scripted fake.

use arboard::Clipboard;
use tracing::debug;

use crate::error::Result;

/// Read access to a clipboard.
///
/// `read_text` returns `Ok(None)` when the clipboard is empty or holds
/// non-text content (images, files); only platform failures are errors.
pub trait ClipboardSource: Send {
    /// Read the current clipboard text, if any.
    fn read_text(&mut self) -> Result<Option<String>>;
}

/// Write access to a clipboard.
///
/// Used by front-ends copying a history row back to the OS clipboard. The
/// re-observation that follows on the next tick is suppressed by the
/// detector's dedup stages, not by this trait.
pub trait ClipboardSink: Send {
    /// Replace the clipboard contents with the given text.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The real OS clipboard.
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    /// Connect to the OS clipboard.
    ///
    /// Fails when no clipboard is available (e.g. headless session).
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: Clipboard::new()?,
        })
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<Option<String>> {
        match self.inner.get_text() {
            Ok(text) => Ok(Some(text)),
            // Empty clipboard or non-text content: nothing to observe.
            Err(arboard::Error::ContentNotAvailable) => {
                debug!("clipboard holds no text content");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text.to_owned())?;
        Ok(())
    }
}
