//! Error types for the engine.

use clipkeep_clipboard::ClipboardError;
use clipkeep_store::StoreError;
use thiserror::Error;

/// Errors that can occur during engine operations.
///
/// Foreground (user-initiated) operations propagate these to the caller.
/// Background tick errors never reach here: the watcher contains them and
/// logs instead, so a failing tick cannot kill the sampling loop.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Storage error. Loud by design: silent data loss in a history tool
    /// is unacceptable.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Clipboard access error (e.g. no clipboard in a headless session).
    #[error("clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
