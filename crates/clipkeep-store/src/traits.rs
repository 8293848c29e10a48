//! Store trait: the abstract interface for history persistence.
//!
//! This trait allows the engine to be storage-agnostic. Implementations
//! include SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;
use clipkeep_core::{EntryId, HistoryEntry};

use crate::error::Result;

/// The Store trait: async interface for history persistence.
///
/// All methods are async to support both sync (SQLite) and async backends.
/// For SQLite, we use `spawn_blocking` internally to avoid blocking the
/// runtime.
///
/// # Design Notes
///
/// - **Dumb CRUD surface**: the store appends whatever text it is handed.
///   Trimming, empty rejection, and consecutive-duplicate suppression are
///   the engine's responsibility, so all callers share one insert path.
/// - **Idempotent mutations**: `toggle_favorite` and `delete_by_id` on a
///   missing id are no-ops, not errors.
/// - **Atomic bulk deletes**: `delete_non_favorites` and
///   `delete_oldest_non_favorites` are all-or-nothing; no reader observes
///   an intermediate state.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert text as a new non-favorite entry.
    ///
    /// Assigns the next id, stamps `created_at` with the current time, and
    /// returns the new id.
    async fn insert(&self, text: &str) -> Result<EntryId>;

    /// All entries, newest-first (descending id).
    async fn list_all(&self) -> Result<Vec<HistoryEntry>>;

    /// Text of the most-recently-inserted entry (highest id), if any.
    ///
    /// This is the detector's store-lookback read: it answers "was this
    /// text already persisted by another path?" without fetching history.
    async fn latest_text(&self) -> Result<Option<String>>;

    /// Total number of entries, favorites included.
    async fn count(&self) -> Result<u64>;

    /// Flip the favorite flag of an entry. No-op when the id is absent.
    async fn toggle_favorite(&self, id: EntryId) -> Result<()>;

    /// Remove one entry. No-op when the id is absent.
    async fn delete_by_id(&self, id: EntryId) -> Result<()>;

    /// Remove every entry unconditionally.
    async fn delete_all(&self) -> Result<()>;

    /// Remove every non-favorite entry, leaving favorites untouched.
    ///
    /// Returns the number of entries deleted.
    async fn delete_non_favorites(&self) -> Result<u64>;

    /// Remove the `n` oldest non-favorite entries.
    ///
    /// Ordered by `created_at` ascending, ties broken by id ascending.
    /// Deletes fewer than `n` when the non-favorite subset is smaller;
    /// favorites are never selected. Returns the number deleted.
    async fn delete_oldest_non_favorites(&self, n: u64) -> Result<u64>;
}
