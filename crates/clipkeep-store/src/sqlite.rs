//! SQLite implementation of the Store trait.
//!
//! This is the primary storage backend for clipkeep. It uses rusqlite with
//! bundled SQLite, wrapped in async via tokio::spawn_blocking.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use clipkeep_core::{EntryId, HistoryEntry};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::Store;

/// SQLite-based store implementation.
///
/// Thread-safe via internal Mutex. All operations use spawn_blocking to
/// avoid blocking the async runtime; the mutex also serializes mutations,
/// so no two operations interleave on the connection.
pub struct SqliteStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run a read-only operation on the connection off the async runtime.
    async fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(lock_poisoned)?;
            f(&conn)
        })
        .await
        .map_err(join_failed)?
    }

    /// Run an operation that needs mutable access (transactions).
    async fn with_conn_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = conn.lock().map_err(lock_poisoned)?;
            f(&mut conn)
        })
        .await
        .map_err(join_failed)?
    }
}

/// Map a poisoned connection mutex to a store error.
fn lock_poisoned<T>(e: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Database(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
        Some(format!("mutex poisoned: {}", e)),
    ))
}

/// Map a spawn_blocking join failure to a store error.
fn join_failed(e: tokio::task::JoinError) -> StoreError {
    StoreError::Database(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
        Some(format!("spawn_blocking failed: {}", e)),
    ))
}

// Helper to convert a row to HistoryEntry
fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<HistoryEntry> {
    Ok(HistoryEntry {
        id: EntryId::new(row.get("id")?),
        text: row.get("text")?,
        favorite: row.get::<_, i64>("favorite")? != 0,
        created_at: row.get("created_at")?,
    })
}

#[async_trait]
impl Store for SqliteStore {
    async fn insert(&self, text: &str) -> Result<EntryId> {
        let text = text.to_owned();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO history (text, favorite, created_at) VALUES (?1, 0, ?2)",
                params![text, now_millis()],
            )?;
            Ok(EntryId::new(conn.last_insert_rowid()))
        })
        .await
    }

    async fn list_all(&self) -> Result<Vec<HistoryEntry>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, text, favorite, created_at FROM history ORDER BY id DESC",
            )?;
            let entries = stmt
                .query_map([], row_to_entry)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(entries)
        })
        .await
    }

    async fn latest_text(&self) -> Result<Option<String>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT text FROM history ORDER BY id DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()
            .map_err(StoreError::from)
        })
        .await
    }

    async fn count(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))?;
            Ok(count as u64)
        })
        .await
    }

    async fn toggle_favorite(&self, id: EntryId) -> Result<()> {
        self.with_conn(move |conn| {
            conn.execute(
                "UPDATE history SET favorite = NOT favorite WHERE id = ?1",
                params![id.as_i64()],
            )?;
            Ok(())
        })
        .await
    }

    async fn delete_by_id(&self, id: EntryId) -> Result<()> {
        self.with_conn(move |conn| {
            conn.execute("DELETE FROM history WHERE id = ?1", params![id.as_i64()])?;
            Ok(())
        })
        .await
    }

    async fn delete_all(&self) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM history", [])?;
            Ok(())
        })
        .await
    }

    async fn delete_non_favorites(&self) -> Result<u64> {
        // Single statement: atomic with respect to concurrent readers.
        self.with_conn(|conn| {
            let deleted = conn.execute("DELETE FROM history WHERE favorite = 0", [])?;
            Ok(deleted as u64)
        })
        .await
    }

    async fn delete_oldest_non_favorites(&self, n: u64) -> Result<u64> {
        if n == 0 {
            return Ok(0);
        }

        self.with_conn_mut(move |conn| {
            let tx = conn.transaction()?;

            // Select victims first so the ordering is pinned, then delete
            // them inside the same transaction: all or nothing.
            let ids: Vec<i64> = {
                let mut stmt = tx.prepare(
                    "SELECT id FROM history WHERE favorite = 0
                     ORDER BY created_at ASC, id ASC LIMIT ?1",
                )?;
                let ids = stmt
                    .query_map(params![n as i64], |row| row.get(0))?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                ids
            };

            for id in &ids {
                tx.execute("DELETE FROM history WHERE id = ?1", params![id])?;
            }

            tx.commit()?;
            Ok(ids.len() as u64)
        })
        .await
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
