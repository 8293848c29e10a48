//! In-memory implementation of the Store trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite but
//! keeps everything in memory with no persistence.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use clipkeep_core::{EntryId, HistoryEntry};

use crate::error::Result;
use crate::traits::Store;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

struct MemoryStoreInner {
    /// Entries keyed by id. BTreeMap iteration order is ascending id,
    /// which matches insertion order.
    entries: BTreeMap<i64, HistoryEntry>,

    /// Next id to assign. Monotonic, never reused.
    next_id: i64,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryStoreInner {
                entries: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert(&self, text: &str) -> Result<EntryId> {
        let mut inner = self.inner.write().unwrap();

        let id = EntryId::new(inner.next_id);
        inner.next_id += 1;

        inner.entries.insert(
            id.as_i64(),
            HistoryEntry::new(id, text, false, now_millis()),
        );

        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<HistoryEntry>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.entries.values().rev().cloned().collect())
    }

    async fn latest_text(&self) -> Result<Option<String>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.entries.values().next_back().map(|e| e.text.clone()))
    }

    async fn count(&self) -> Result<u64> {
        let inner = self.inner.read().unwrap();
        Ok(inner.entries.len() as u64)
    }

    async fn toggle_favorite(&self, id: EntryId) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        if let Some(entry) = inner.entries.get_mut(&id.as_i64()) {
            entry.favorite = !entry.favorite;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: EntryId) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.entries.remove(&id.as_i64());
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.entries.clear();
        Ok(())
    }

    async fn delete_non_favorites(&self) -> Result<u64> {
        let mut inner = self.inner.write().unwrap();
        let before = inner.entries.len();
        inner.entries.retain(|_, e| e.favorite);
        Ok((before - inner.entries.len()) as u64)
    }

    async fn delete_oldest_non_favorites(&self, n: u64) -> Result<u64> {
        let mut inner = self.inner.write().unwrap();

        // created_at ascending, ties broken by id ascending. BTreeMap
        // iteration already yields ascending id, so a stable sort on
        // created_at preserves the tie-break.
        let mut victims: Vec<(i64, i64)> = inner
            .entries
            .values()
            .filter(|e| !e.favorite)
            .map(|e| (e.created_at, e.id.as_i64()))
            .collect();
        victims.sort();
        victims.truncate(n as usize);

        for (_, id) in &victims {
            inner.entries.remove(id);
        }

        Ok(victims.len() as u64)
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
