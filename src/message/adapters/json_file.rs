//! File-backed implementation of the `MessageArchive` port.
//!
//! Each entry is appended to a single file as a pretty-printed JSON object
//! followed by `,\n`. The file as a whole is not a JSON document.

use std::io::Write as _;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use crate::message::{
    domain::StoredMessage,
    ports::archive::{ArchiveResult, MessageArchive},
};

/// File name used when none is configured.
pub const DEFAULT_ARCHIVE_FILE: &str = "stored_messages.json";

/// Appends stored messages to a file inside a directory capability.
///
/// The file is opened in append mode for every entry and created on first
/// use, so entries written by earlier sessions are kept.
///
/// # Example
///
/// ```no_run
/// use camino::Utf8Path;
/// use quickchat::message::adapters::json_file::JsonFileArchive;
///
/// let archive = JsonFileArchive::open(Utf8Path::new(".")).expect("directory should open");
/// assert_eq!(archive.file_name().as_str(), "stored_messages.json");
/// ```
#[derive(Debug)]
pub struct JsonFileArchive {
    dir: Dir,
    file_name: Utf8PathBuf,
}

impl JsonFileArchive {
    /// Opens `directory` and archives into [`DEFAULT_ARCHIVE_FILE`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::message::error::ArchiveError::Io`] if the directory
    /// cannot be opened.
    pub fn open(directory: &Utf8Path) -> ArchiveResult<Self> {
        let dir = Dir::open_ambient_dir(directory, ambient_authority())?;
        Ok(Self::from_dir(dir, DEFAULT_ARCHIVE_FILE))
    }

    /// Archives into `file_name` inside an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir, file_name: impl Into<Utf8PathBuf>) -> Self {
        Self {
            dir,
            file_name: file_name.into(),
        }
    }

    /// Returns the archive file name relative to its directory.
    #[must_use]
    pub fn file_name(&self) -> &Utf8Path {
        &self.file_name
    }
}

impl MessageArchive for JsonFileArchive {
    fn append(&self, entry: &StoredMessage) -> ArchiveResult<()> {
        let block = entry.to_archive_block()?;

        let mut options = OpenOptions::new();
        options.append(true).create(true);
        let mut file = self.dir.open_with(&self.file_name, &options)?;
        file.write_all(block.as_bytes())?;
        file.flush()?;

        debug!(
            file = %self.file_name,
            message_id = entry.message_id(),
            message_number = entry.message_number(),
            "appended stored message"
        );
        Ok(())
    }
}
