//! Composed drafts and the records created when a draft is sent.

use super::{HashOutcome, MessageIdentifier, SequenceNumber, compute_hash};

/// A message composed by the caller and awaiting a disposition.
///
/// Drafts are not validated on construction; run them through a
/// [`crate::message::ports::MessageValidator`] first.
///
/// # Examples
///
/// ```
/// use quickchat::message::domain::DraftMessage;
///
/// let draft = DraftMessage::new("1234567890", "+27718693002", "Test message");
/// assert_eq!(draft.recipient(), "+27718693002");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftMessage {
    identifier: MessageIdentifier,
    recipient: String,
    body: String,
}

impl DraftMessage {
    /// Creates a draft from its three caller-supplied fields.
    #[must_use]
    pub fn new(
        identifier: impl Into<MessageIdentifier>,
        recipient: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            recipient: recipient.into(),
            body: body.into(),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn identifier(&self) -> &MessageIdentifier {
        &self.identifier
    }

    /// Returns the recipient phone number.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Computes the fingerprint this draft would carry at `sequence`.
    #[must_use]
    pub fn hash_at(&self, sequence: SequenceNumber) -> HashOutcome {
        compute_hash(&self.identifier, sequence, &self.body)
    }
}

/// A sent message.
///
/// Records are immutable and only created by the send disposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    identifier: MessageIdentifier,
    sequence_number: SequenceNumber,
    recipient: String,
    body: String,
    hash: HashOutcome,
}

impl MessageRecord {
    /// Creates a record for `draft` sent as message number `sequence_number`.
    #[must_use]
    pub fn from_draft(draft: &DraftMessage, sequence_number: SequenceNumber) -> Self {
        Self {
            identifier: draft.identifier.clone(),
            sequence_number,
            recipient: draft.recipient.clone(),
            body: draft.body.clone(),
            hash: draft.hash_at(sequence_number),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn identifier(&self) -> &MessageIdentifier {
        &self.identifier
    }

    /// Returns the sequence number assigned when sent.
    #[must_use]
    pub const fn sequence_number(&self) -> SequenceNumber {
        self.sequence_number
    }

    /// Returns the recipient phone number.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the fingerprint computed at send time.
    #[must_use]
    pub const fn hash(&self) -> &HashOutcome {
        &self.hash
    }
}
