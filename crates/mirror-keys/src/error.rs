//! Error types for key encoding and entity loading.

use mirror_keys_core::CoreError;
use thiserror::Error;

/// Errors that can occur in mirror key operations.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// The key is neither a single public key nor a key list.
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),

    /// Core error (bad key bytes, undecodable wire data).
    #[error("key error: {0}")]
    Core(CoreError),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV header is not usable.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// A CSV row has fewer cells than the header.
    #[error("malformed row at line {line}: expected {expected} cells, got {got}")]
    MalformedRow {
        line: usize,
        expected: usize,
        got: usize,
    },

    /// A required column is absent.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// A timestamp could not be parsed or does not fit.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl From<CoreError> for MirrorError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnsupportedKeyType(msg) => MirrorError::UnsupportedKeyType(msg),
            other => MirrorError::Core(other),
        }
    }
}

/// Result type for mirror key operations.
pub type Result<T> = std::result::Result<T, MirrorError>;
