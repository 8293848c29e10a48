//! # Clipkeep Testkit
//!
//! Testing utilities for clipkeep.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Scripted clipboards**: Deterministic [`ScriptedClipboard`] sources that
//!   replay a planned sequence of reads, one per tick
//! - **Fixtures**: [`TestFixture`] for setting up an engine over a memory store
//! - **Generators**: Proptest strategies for clipboard sample sequences
//!
//! ## Scripted Clipboards
//!
//! ```rust
//! use clipkeep_testkit::ScriptedClipboard;
//! use clipkeep_clipboard::ClipboardSource;
//!
//! let mut clipboard = ScriptedClipboard::from_texts(["x", "y"]);
//! assert_eq!(clipboard.read_text().unwrap().as_deref(), Some("x"));
//! assert_eq!(clipboard.read_text().unwrap().as_deref(), Some("y"));
//! // Exhausted scripts read as an empty clipboard.
//! assert_eq!(clipboard.read_text().unwrap(), None);
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use clipkeep_testkit::generators::sample_sequence;
//!
//! proptest! {
//!     #[test]
//!     fn detector_handles_any_sequence(samples in sample_sequence(40)) {
//!         // drive a watcher over the samples...
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod scripted;

pub use fixtures::TestFixture;
pub use generators::{sample_sequence, sample_text, tagged_sequence};
pub use scripted::ScriptedClipboard;
