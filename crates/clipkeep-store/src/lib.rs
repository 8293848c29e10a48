//! # Clipkeep Store
//!
//! Storage abstraction for clipkeep. Provides a trait-based interface for
//! history persistence with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The store module abstracts history storage behind the [`Store`] trait,
//! allowing the engine to be storage-agnostic. The primary implementation
//! is [`SqliteStore`], with [`MemoryStore`] for testing.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for all storage operations
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clipkeep_store::{SqliteStore, Store};
//!
//! async fn example() {
//!     // Open a SQLite database
//!     let store = SqliteStore::open("history.sqlite").unwrap();
//!
//!     // Or use an in-memory database for testing
//!     let store = SqliteStore::open_memory().unwrap();
//!
//!     let id = store.insert("copied text").await.unwrap();
//!     let entries = store.list_all().await.unwrap();
//!     assert_eq!(entries[0].id, id);
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Newest-first reads**: `list_all` returns entries in descending id order
//! - **Idempotent deletes**: deleting or toggling a missing id is a no-op
//! - **Atomic bulk deletes**: multi-row deletions run inside one transaction;
//!   no reader observes a partial eviction

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::Store;
