//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Storage failures are not masked: a history tool that silently loses
/// writes is worse than one that reports them. Callers decide whether to
/// abort or log loudly and continue.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
