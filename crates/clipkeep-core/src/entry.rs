//! History entry types.
//!
//! All identifiers are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a history entry.
///
/// Wraps the store's rowid. Ids are assigned monotonically at insertion:
/// a higher id means a later entry. The id is stable for the entry's
/// lifetime and is never reused for ordering-sensitive comparisons.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub i64);

impl EntryId {
    /// Create an EntryId from a raw rowid.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw rowid.
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId({})", self.0)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntryId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// One recorded clipboard snapshot.
///
/// Entries are immutable once created except for the `favorite` flag.
/// `text` is always non-empty and whitespace-trimmed; the insert paths
/// enforce this before an entry is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique, insertion-ordered identifier.
    pub id: EntryId,
    /// Trimmed, non-empty clipboard text.
    pub text: String,
    /// Protects the entry from automatic eviction. Mutable via toggle.
    pub favorite: bool,
    /// Insertion timestamp (Unix ms). Immutable.
    pub created_at: i64,
}

impl HistoryEntry {
    /// Create a new entry. Callers are expected to pass normalized text.
    pub fn new(id: EntryId, text: impl Into<String>, favorite: bool, created_at: i64) -> Self {
        Self {
            id,
            text: text.into(),
            favorite,
            created_at,
        }
    }
}
