//! In-memory implementation of the `MessageArchive` port.
//!
//! Keeps stored messages in append order. Useful for tests and for callers
//! that forward stored messages elsewhere themselves.

use std::sync::{Arc, RwLock};

use crate::message::{
    domain::StoredMessage,
    error::ArchiveError,
    ports::archive::{ArchiveResult, MessageArchive},
};

/// In-memory implementation of [`MessageArchive`].
///
/// Thread-safe via internal [`RwLock`]. Clones share the same entries.
///
/// # Example
///
/// ```
/// use quickchat::message::adapters::memory::InMemoryMessageArchive;
///
/// let archive = InMemoryMessageArchive::new();
/// assert!(archive.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessageArchive {
    entries: Arc<RwLock<Vec<StoredMessage>>>,
}

impl InMemoryMessageArchive {
    /// Creates an empty archive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the archived entries in append order.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Unavailable`] if the internal lock is poisoned.
    pub fn entries(&self) -> ArchiveResult<Vec<StoredMessage>> {
        let guard = self
            .entries
            .read()
            .map_err(|e| ArchiveError::unavailable(format!("lock poisoned: {e}")))?;
        Ok(guard.clone())
    }

    /// Returns the number of archived entries.
    ///
    /// Returns `0` if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing has been archived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MessageArchive for InMemoryMessageArchive {
    fn append(&self, entry: &StoredMessage) -> ArchiveResult<()> {
        let mut guard = self
            .entries
            .write()
            .map_err(|e| ArchiveError::unavailable(format!("lock poisoned: {e}")))?;
        guard.push(entry.clone());
        Ok(())
    }
}
