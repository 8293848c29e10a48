//! A clipboard source that replays a planned script.

use std::collections::VecDeque;

use clipkeep_clipboard::{ClipboardError, ClipboardSink, ClipboardSource, Result};

/// One step of a clipboard script.
#[derive(Debug)]
enum Step {
    Text(String),
    Empty,
    Fail,
}

/// Deterministic clipboard source for tests.
///
/// Each `read_text` consumes one scripted step, matching the one-sample-
/// per-tick contract of the watcher. An exhausted script reads as an empty
/// clipboard forever, so a test can run extra ticks safely.
#[derive(Debug, Default)]
pub struct ScriptedClipboard {
    steps: VecDeque<Step>,
}

impl ScriptedClipboard {
    /// Empty script: every read sees an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script that yields the given texts in order, one per read.
    pub fn from_texts<I, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut script = Self::new();
        for text in texts {
            script.push_text(text);
        }
        script
    }

    /// Append a text sample.
    pub fn push_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.steps.push_back(Step::Text(text.into()));
        self
    }

    /// Append an empty-clipboard sample.
    pub fn push_empty(&mut self) -> &mut Self {
        self.steps.push_back(Step::Empty);
        self
    }

    /// Append a failing read.
    pub fn push_failure(&mut self) -> &mut Self {
        self.steps.push_back(Step::Fail);
        self
    }

    /// Number of unconsumed steps.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl ClipboardSource for ScriptedClipboard {
    fn read_text(&mut self) -> Result<Option<String>> {
        match self.steps.pop_front() {
            Some(Step::Text(text)) => Ok(Some(text)),
            Some(Step::Empty) | None => Ok(None),
            Some(Step::Fail) => Err(ClipboardError::Backend(
                arboard_unavailable(),
            )),
        }
    }
}

impl ClipboardSink for ScriptedClipboard {
    /// Writing pushes the text onto the script, so the next read observes
    /// it - the shape of a real copy-then-sample round trip.
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.push_text(text);
        Ok(())
    }
}

/// The error a platform without a clipboard produces.
fn arboard_unavailable() -> arboard::Error {
    arboard::Error::ClipboardNotSupported
}
