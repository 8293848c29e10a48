//! Error types for clipboard access.

use thiserror::Error;

/// Errors that can occur while talking to the OS clipboard.
///
/// These are transient by contract: the sampling loop logs them and moves
/// on to the next tick. They never abort the process.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The platform clipboard backend failed.
    #[error("clipboard error: {0}")]
    Backend(#[from] arboard::Error),
}

/// Result type for clipboard operations.
pub type Result<T> = std::result::Result<T, ClipboardError>;
