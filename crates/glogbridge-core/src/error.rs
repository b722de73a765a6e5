//! Error types for bridge translation

use thiserror::Error;

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Error type for bridge operations
///
/// Per-field decode failures are not represented here: a single value that
/// fails strict UTF-8 decoding falls back to raw bytes and never surfaces.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The field descriptor sequence itself is unreadable
    #[error("malformed field input: {0}")]
    MalformedInput(String),

    /// A field map headed for the variant backend lacks the MESSAGE key
    #[error("missing mandatory MESSAGE field")]
    MissingMessage,

    /// Handing a record to the runtime logging registry failed
    #[error("runtime dispatch failed: {0}")]
    DispatchFailed(String),

    /// A native write backend reported failure
    #[error("native write failed: {0}")]
    WriteFailed(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}
