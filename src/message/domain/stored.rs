//! Archive entries written by the store disposition.

use super::{DraftMessage, MessageIdentifier, SequenceNumber};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Terminator appended after every archived entry.
///
/// Entries are comma-terminated objects with no enclosing array, so an
/// archive file must be wrapped in `[...]` (minus the final comma) before it
/// parses as a JSON document.
pub const ENTRY_TERMINATOR: &str = ",\n";

/// A message saved for later sending.
///
/// Field order is part of the archive format: `messageId`, `messageNumber`,
/// `recipient`, `messageContent`, `messageHash`, `timestamp`.
///
/// # Examples
///
/// ```
/// use quickchat::message::domain::{DraftMessage, SequenceNumber, StoredMessage};
/// use mockable::DefaultClock;
///
/// let draft = DraftMessage::new("1234567890", "+27718693002", "Hello world");
/// let entry = StoredMessage::from_draft(&draft, SequenceNumber::new(1), &DefaultClock);
/// assert_eq!(entry.message_hash(), "12:1:HELLOWORLD");
/// assert!(entry.to_archive_block().expect("serializable").ends_with("},\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMessage {
    message_id: MessageIdentifier,
    message_number: SequenceNumber,
    recipient: String,
    message_content: String,
    message_hash: String,
    timestamp: String,
}

impl StoredMessage {
    /// Builds an entry for `draft` using `preview` as its message number.
    ///
    /// The timestamp is the clock's current time in milliseconds since the
    /// Unix epoch, rendered as decimal text.
    #[must_use]
    pub fn from_draft(draft: &DraftMessage, preview: SequenceNumber, clock: &impl Clock) -> Self {
        Self {
            message_id: draft.identifier().clone(),
            message_number: preview,
            recipient: draft.recipient().to_owned(),
            message_content: draft.body().to_owned(),
            message_hash: draft.hash_at(preview).as_str().to_owned(),
            timestamp: clock.utc().timestamp_millis().to_string(),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub fn message_id(&self) -> &str {
        self.message_id.as_str()
    }

    /// Returns the preview message number.
    #[must_use]
    pub const fn message_number(&self) -> u64 {
        self.message_number.value()
    }

    /// Returns the recipient phone number.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Returns the message body.
    #[must_use]
    pub fn message_content(&self) -> &str {
        &self.message_content
    }

    /// Returns the fingerprint computed with the preview number.
    #[must_use]
    pub fn message_hash(&self) -> &str {
        &self.message_hash
    }

    /// Returns the creation time in epoch milliseconds.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Renders the entry as written to an archive file.
    ///
    /// The object is pretty-printed with two-space indentation and followed
    /// by [`ENTRY_TERMINATOR`].
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the entry cannot be encoded.
    pub fn to_archive_block(&self) -> Result<String, serde_json::Error> {
        let mut block = serde_json::to_string_pretty(self)?;
        block.push_str(ENTRY_TERMINATOR);
        Ok(block)
    }
}
