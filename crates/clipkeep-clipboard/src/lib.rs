//! # Clipkeep Clipboard
//!
//! OS clipboard access behind narrow traits, so the engine never touches
//! the platform clipboard directly and tests can script every sample.
//!
//! ## Key Types
//!
//! - [`ClipboardSource`] - Read the current clipboard text
//! - [`ClipboardSink`] - Write text to the clipboard
//! - [`SystemClipboard`] - The real OS clipboard, backed by `arboard`
//!
//! Reads are best-effort: an empty or non-text clipboard is `Ok(None)`,
//! not an error. Only actual platform failures surface as
//! [`ClipboardError`], and the sampling loop treats those as transient.

pub mod error;
pub mod source;

pub use error::{ClipboardError, Result};
pub use source::{ClipboardSink, ClipboardSource, SystemClipboard};
