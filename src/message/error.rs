//! Error types for message archiving.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Field
//! validation and dispatch never fail; they report outcomes instead.

use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while archiving a stored message.
#[derive(Debug, Clone, Error)]
pub enum ArchiveError {
    /// The backing storage could not be opened or written.
    #[error("archive I/O error: {0}")]
    Io(Arc<std::io::Error>),

    /// The entry could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The archive is not usable, for example after a poisoned lock.
    #[error("archive unavailable: {0}")]
    Unavailable(String),
}

impl ArchiveError {
    /// Creates an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates an unavailable-archive error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

impl From<std::io::Error> for ArchiveError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err)
    }
}

impl From<serde_json::Error> for ArchiveError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
