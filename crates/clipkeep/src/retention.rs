//! Retention policy: bound the store without ever touching a favorite.
//!
//! Runs after every insert. Eviction selects the oldest non-favorite
//! entries first; when favorites dominate, the store legitimately stays
//! above the nominal maximum rather than losing a favorite.

use clipkeep_store::{Result, Store};
use tracing::debug;

/// The eviction rule bounding total non-favorite entry count.
#[derive(Debug, Clone, Copy)]
pub struct RetentionPolicy {
    max_entries: usize,
}

impl RetentionPolicy {
    /// Create a policy with the given maximum entry count.
    pub fn new(max_entries: usize) -> Self {
        Self { max_entries }
    }

    /// The configured maximum.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Bring the store back to (at most) the configured maximum.
    ///
    /// Deletes exactly `count - max` of the oldest non-favorites when the
    /// bound is exceeded, fewer when the non-favorite subset is smaller.
    /// The deletion is atomic: readers never observe a partial eviction.
    /// Returns the number of entries evicted.
    pub async fn enforce<S: Store + ?Sized>(&self, store: &S) -> Result<u64> {
        let count = store.count().await?;
        if count <= self.max_entries as u64 {
            return Ok(0);
        }

        let excess = count - self.max_entries as u64;
        let evicted = store.delete_oldest_non_favorites(excess).await?;
        if evicted > 0 {
            debug!(evicted, excess, "retention evicted oldest non-favorites");
        }
        Ok(evicted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipkeep_store::MemoryStore;

    #[tokio::test]
    async fn test_noop_at_or_below_maximum() {
        let store = MemoryStore::new();
        let policy = RetentionPolicy::new(3);

        store.insert("a").await.unwrap();
        store.insert("b").await.unwrap();
        store.insert("c").await.unwrap();

        assert_eq!(policy.enforce(&store).await.unwrap(), 0);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_evicts_exactly_the_excess_oldest_first() {
        let store = MemoryStore::new();
        let policy = RetentionPolicy::new(3);

        for text in ["a", "b", "c", "d", "e"] {
            store.insert(text).await.unwrap();
        }

        assert_eq!(policy.enforce(&store).await.unwrap(), 2);
        let texts: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.text)
            .collect();
        assert_eq!(texts, vec!["e", "d", "c"]);
    }

    #[tokio::test]
    async fn test_favorites_survive_even_above_maximum() {
        let store = MemoryStore::new();
        let policy = RetentionPolicy::new(2);

        for text in ["f1", "f2", "f3"] {
            let id = store.insert(text).await.unwrap();
            store.toggle_favorite(id).await.unwrap();
        }
        store.insert("normal").await.unwrap();

        // Count is 4 against a maximum of 2, but only one non-favorite
        // exists: it is evicted and the favorites all remain.
        assert_eq!(policy.enforce(&store).await.unwrap(), 1);

        let entries = store.list_all().await.unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.favorite));
    }
}
