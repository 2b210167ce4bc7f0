//! Error types for filesystem operations.

use thiserror::Error;

/// Failure modes of the read/write/walk primitives.
#[derive(Error, Debug)]
pub enum IoError {
    /// File does not exist or its metadata is unreadable.
    #[error("file not found: {0}")]
    NotFound(String),

    /// File exceeds the configured size limit.
    #[error("file too large: {0} bytes (limit: {1})")]
    TooLarge(u64, u64),

    /// File contains binary content (NUL bytes detected).
    #[error("binary file detected")]
    Binary,

    /// File content is not valid UTF-8.
    #[error("invalid utf-8 content")]
    Encoding,

    /// Low-level I/O error from std::io.
    #[error("io error: {0}")]
    System(#[from] std::io::Error),
}
