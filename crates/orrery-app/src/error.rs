//! Error types for the runtime boundary.
//!
//! The engine itself never errors — clamping is its contract — so these
//! cover only the runtime shell: session lifecycle misuse and channel or
//! lock failures.

use thiserror::Error;

/// Result type for runtime operations.
pub type PacerResult<T> = Result<T, PacerError>;

/// Errors that can occur driving the pacer runtime.
#[derive(Error, Debug)]
pub enum PacerError {
    #[error("Session is already running")]
    AlreadyRunning,

    #[error("No session is running")]
    NotRunning,

    #[error("Pacer loop channel closed")]
    ChannelClosed,

    #[error("Shared state lock poisoned")]
    StatePoisoned,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
