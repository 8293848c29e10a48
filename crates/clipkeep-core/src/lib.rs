//! # Clipkeep Core
//!
//! Pure primitives for the clipkeep history engine: entries, text
//! normalization, and change detection.
//!
//! This crate contains no I/O, no storage, no clipboard access. It is pure
//! computation over clipboard snapshots.
//!
//! ## Key Types
//!
//! - [`HistoryEntry`] - One recorded clipboard snapshot
//! - [`EntryId`] - Insertion-ordered identifier for an entry
//! - [`ChangeTracker`] - The "last seen" state machine of the change detector
//!
//! ## Normalization
//!
//! All text entering the system is whitespace-trimmed, and empty text is
//! rejected before it reaches storage. See [`text`] module.

pub mod detect;
pub mod entry;
pub mod text;

pub use detect::ChangeTracker;
pub use entry::{EntryId, HistoryEntry};
pub use text::normalize;
