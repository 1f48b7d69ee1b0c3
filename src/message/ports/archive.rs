//! Archive port for messages stored to send later.
//!
//! The store disposition hands each entry to an archive. Archives may be
//! backed by a file, memory, or anything else that accepts appends.

use crate::message::{domain::StoredMessage, error::ArchiveError};

/// Result type for archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Port for appending stored messages.
///
/// # Implementation Notes
///
/// Implementations must:
/// - Preserve append order
/// - Never rewrite or remove earlier entries
/// - Handle concurrent callers safely
#[cfg_attr(test, mockall::automock)]
pub trait MessageArchive: Send + Sync {
    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError`] when the entry cannot be encoded or the
    /// backing storage rejects the write.
    fn append(&self, entry: &StoredMessage) -> ArchiveResult<()>;
}
