//! # Clipkeep
//!
//! A personal clipboard-history engine: it watches the OS clipboard,
//! persists a deduplicated, size-bounded history of text snippets,
//! protects favorites from eviction, and notifies a display surface
//! whenever history changes.
//!
//! ## Key Concepts
//!
//! - **History entry**: One recorded clipboard snapshot. Immutable except
//!   for its favorite flag.
//! - **Favorite**: A flag exempting an entry from automatic eviction.
//! - **Retention policy**: Bounds the non-favorite entry count by evicting
//!   oldest-first after every insert.
//! - **Tick**: One pass of the periodic clipboard-sampling loop.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clipkeep::{EngineConfig, HistoryEngine};
//! use clipkeep::store::SqliteStore;
//! use std::sync::Arc;
//!
//! async fn example() -> clipkeep::Result<()> {
//!     let store = SqliteStore::open("history.sqlite")?;
//!     let engine = Arc::new(HistoryEngine::new(store, EngineConfig::default()));
//!
//!     // Watch the OS clipboard in the background.
//!     let mut changes = engine.subscribe();
//!     let _watcher = engine.spawn_system_watcher()?;
//!
//!     // Display surface: react to detected changes, mutate on user action.
//!     let text = changes.recv().await.expect("watcher closed");
//!     println!("clipboard now holds: {text}");
//!     let history = engine.get_history().await?;
//!     engine.toggle_favorite(history[0].id).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `clipkeep::core` - Entry types and change detection
//! - `clipkeep::store` - Storage abstraction and SQLite
//! - `clipkeep::clipboard` - OS clipboard source/sink

pub mod config;
pub mod engine;
pub mod error;
pub mod retention;
pub mod watcher;

// Re-export component crates
pub use clipkeep_clipboard as clipboard;
pub use clipkeep_core as core;
pub use clipkeep_store as store;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use engine::{HistoryEngine, RecordOutcome};
pub use error::{EngineError, Result};
pub use retention::RetentionPolicy;
pub use watcher::Watcher;

// Re-export commonly used component types
pub use clipkeep_clipboard::{ClipboardSink, ClipboardSource, SystemClipboard};
pub use clipkeep_core::{ChangeTracker, EntryId, HistoryEntry};
pub use clipkeep_store::{MemoryStore, SqliteStore, Store};
