//! The history engine: unified API over store, retention, and watcher.
//!
//! This is the Sync Bridge of the system: the display surface calls the
//! engine for every mutation and full-history read, and subscribes to the
//! clipboard-changed channel for push notifications from the background
//! watcher. Both insert paths (watcher and foreground save) funnel through
//! [`HistoryEngine::record`], which is where trimming, empty rejection,
//! consecutive-duplicate suppression, and retention enforcement live.

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::debug;

use clipkeep_clipboard::{ClipboardSource, SystemClipboard};
use clipkeep_core::{normalize, EntryId, HistoryEntry};
use clipkeep_store::Store;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::retention::RetentionPolicy;
use crate::watcher::Watcher;

/// Capacity of the clipboard-changed broadcast channel. Laggy subscribers
/// drop old notifications and re-read history instead.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Outcome of pushing text through the shared insert path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new entry was persisted (and retention enforced).
    Recorded(EntryId),
    /// The text equals the most-recently-inserted entry; nothing stored.
    DuplicateOfLatest,
    /// Nothing remained after trimming; nothing stored.
    Empty,
}

/// The main engine struct.
///
/// Provides a unified API for:
/// - Recording clipboard snapshots (background and foreground paths)
/// - Reading history, newest-first
/// - Favorite toggling and deletions
/// - Subscribing to clipboard-changed notifications
pub struct HistoryEngine<S: Store> {
    /// The storage backend.
    store: Arc<S>,
    /// Eviction rule applied after every insert.
    retention: RetentionPolicy,
    /// Configuration.
    config: EngineConfig,
    /// Fire-and-forget notification channel to the display surface.
    changes: broadcast::Sender<String>,
}

impl<S: Store> HistoryEngine<S> {
    /// Create a new engine over the given store.
    pub fn new(store: S, config: EngineConfig) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            store: Arc::new(store),
            retention: RetentionPolicy::new(config.max_entries),
            config,
            changes,
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────
    // Insert Path
    // ─────────────────────────────────────────────────────────────────────

    /// Push text through the shared insert path.
    ///
    /// Trims the text and rejects it silently when empty; suppresses it
    /// when it equals the most-recently-inserted entry's text (regardless
    /// of that entry's favorite flag); otherwise inserts a non-favorite
    /// entry and enforces retention.
    pub async fn record(&self, raw: &str) -> Result<RecordOutcome> {
        let Some(text) = normalize(raw) else {
            return Ok(RecordOutcome::Empty);
        };

        if self.store.latest_text().await?.as_deref() == Some(text) {
            debug!("suppressed duplicate of latest entry");
            return Ok(RecordOutcome::DuplicateOfLatest);
        }

        let id = self.store.insert(text).await?;
        self.retention.enforce(&*self.store).await?;
        Ok(RecordOutcome::Recorded(id))
    }

    /// Foreground save from the display surface.
    ///
    /// Same trim/dedup/retention rules as the background path, but fires
    /// no clipboard-changed notification: the surface that saved already
    /// knows and re-reads history itself.
    pub async fn save_to_history(&self, text: &str) -> Result<()> {
        self.record(text).await?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Query and Mutation Pass-Throughs
    // ─────────────────────────────────────────────────────────────────────

    /// Full history, newest-first.
    pub async fn get_history(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.store.list_all().await?)
    }

    /// Flip an entry's favorite flag. No-op for a missing id.
    pub async fn toggle_favorite(&self, id: EntryId) -> Result<()> {
        Ok(self.store.toggle_favorite(id).await?)
    }

    /// Delete one entry. No-op for a missing id.
    pub async fn delete_history(&self, id: EntryId) -> Result<()> {
        Ok(self.store.delete_by_id(id).await?)
    }

    /// Delete every entry, favorites included.
    pub async fn clear_history(&self) -> Result<()> {
        Ok(self.store.delete_all().await?)
    }

    /// Delete every non-favorite entry.
    pub async fn clear_non_favorites(&self) -> Result<()> {
        self.store.delete_non_favorites().await?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────────────────

    /// Subscribe to clipboard-changed notifications.
    ///
    /// The payload is the newly persisted text, sent exactly once per
    /// background-detected insertion. Foreground saves do not notify.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.changes.subscribe()
    }

    /// Emit a clipboard-changed notification.
    ///
    /// Fire-and-forget: a send with no live subscriber is not an error.
    pub(crate) fn notify_change(&self, text: &str) {
        let _ = self.changes.send(text.to_owned());
    }
}

impl<S: Store + 'static> HistoryEngine<S> {
    /// Spawn the background watcher over an arbitrary clipboard source.
    ///
    /// The loop samples at the configured cadence until the returned
    /// handle is aborted or the runtime shuts down.
    pub fn spawn_watcher<C>(self: &Arc<Self>, source: C) -> JoinHandle<()>
    where
        C: ClipboardSource + 'static,
    {
        Watcher::new(Arc::clone(self), source).spawn(self.config.poll_interval)
    }

    /// Spawn the background watcher over the OS clipboard.
    pub fn spawn_system_watcher(self: &Arc<Self>) -> Result<JoinHandle<()>> {
        let source = SystemClipboard::new()?;
        Ok(self.spawn_watcher(source))
    }
}
