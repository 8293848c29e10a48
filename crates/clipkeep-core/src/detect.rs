//! Change detection: the "last seen" state machine.
//!
//! The tracker owns the process-local memory of what the sampling loop has
//! already observed on the OS clipboard. It answers one question per tick:
//! does the clipboard hold text we have not seen on a previous tick?
//!
//! This is only the first of the detector's two comparison stages. The
//! second stage (comparing against the store's most-recent entry, which
//! suppresses double-inserts after a foreground save) needs storage access
//! and lives with the watcher, not here.

use crate::text::normalize;

/// Tracks the last clipboard text observed across sampling ticks.
///
/// Single-writer state owned by the sampling loop. It is reset only when
/// the process restarts; there is no other lifecycle.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    last_seen: Option<String>,
}

impl ChangeTracker {
    /// Create a tracker that has observed nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one clipboard sample to the tracker.
    ///
    /// Returns the trimmed text when it is genuinely new: non-empty and
    /// different from the last text any previous call returned or skipped.
    /// Returns `None` for empty samples and for repeats of the current
    /// clipboard content, so identical content is not re-processed on
    /// every tick.
    pub fn observe(&mut self, raw: &str) -> Option<String> {
        let trimmed = normalize(raw)?;

        if self.last_seen.as_deref() == Some(trimmed) {
            return None;
        }

        self.last_seen = Some(trimmed.to_owned());
        self.last_seen.clone()
    }

    /// The last text observed, if any.
    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }
}
