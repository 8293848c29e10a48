//! Test fixtures and helpers.
//!
//! Common setup code for integration and property tests.

use std::sync::Arc;

use clipkeep::{EngineConfig, HistoryEngine, Watcher};
use clipkeep_store::MemoryStore;

use crate::scripted::ScriptedClipboard;

/// A test fixture with an engine over a fresh in-memory store.
pub struct TestFixture {
    pub engine: Arc<HistoryEngine<MemoryStore>>,
}

impl TestFixture {
    /// Create a fixture with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a fixture with a custom maximum entry count.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self::with_config(EngineConfig::default().with_max_entries(max_entries))
    }

    /// Create a fixture with a full custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: Arc::new(HistoryEngine::new(MemoryStore::new(), config)),
        }
    }

    /// Build a watcher over a scripted clipboard.
    pub fn watcher(&self, script: ScriptedClipboard) -> Watcher<MemoryStore, ScriptedClipboard> {
        Watcher::new(Arc::clone(&self.engine), script)
    }

    /// Drive a fresh watcher through every sample, one tick each.
    pub async fn run_samples<I, T>(&self, samples: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let script = ScriptedClipboard::from_texts(samples);
        let ticks = script.remaining();
        let mut watcher = self.watcher(script);
        for _ in 0..ticks {
            watcher.tick().await;
        }
    }

    /// History texts, newest-first.
    pub async fn texts(&self) -> Vec<String> {
        self.engine
            .get_history()
            .await
            .expect("memory store reads cannot fail")
            .into_iter()
            .map(|e| e.text)
            .collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_samples_stores_newest_first() {
        let fixture = TestFixture::new();
        fixture.run_samples(["a", "b"]).await;
        assert_eq!(fixture.texts().await, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_max_entries_applies() {
        let fixture = TestFixture::with_max_entries(2);
        fixture.run_samples(["a", "b", "c"]).await;
        assert_eq!(fixture.texts().await, vec!["c", "b"]);
    }
}
