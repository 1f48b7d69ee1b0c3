//! Disposition triggers and the status reported for each.

use super::{SequenceNumber, UnknownDispositionError};
use std::fmt;

/// Status text for a sent message.
pub const SENT: &str = "Message successfully sent.";

/// Status text for a discarded draft.
pub const DISCARD_PROMPT: &str = "Press 0 to delete message.";

/// Status text for a stored message.
pub const STORED: &str = "Message successfully stored.";

/// Status text for an unknown trigger.
pub const INVALID_CHOICE: &str = "Invalid choice.";

/// What the caller wants done with a composed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Record the message as sent (trigger `1`).
    Send,
    /// Drop the draft (trigger `2`).
    Discard,
    /// Archive the message for later (trigger `3`).
    Store,
}

impl Disposition {
    /// Returns the numeric menu trigger for this disposition.
    #[must_use]
    pub const fn trigger(self) -> i32 {
        match self {
            Self::Send => 1,
            Self::Discard => 2,
            Self::Store => 3,
        }
    }
}

impl TryFrom<i32> for Disposition {
    type Error = UnknownDispositionError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Send),
            2 => Ok(Self::Discard),
            3 => Ok(Self::Store),
            other => Err(UnknownDispositionError(other)),
        }
    }
}

/// Outcome of dispatching a draft.
///
/// `Display` renders the status text shown to the user.
///
/// # Examples
///
/// ```
/// use quickchat::message::domain::{DispositionOutcome, SequenceNumber};
///
/// let outcome = DispositionOutcome::Sent { sequence_number: SequenceNumber::new(1) };
/// assert_eq!(outcome.to_string(), "Message successfully sent.");
/// assert_eq!(DispositionOutcome::InvalidChoice(9).to_string(), "Invalid choice.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispositionOutcome {
    /// The message was recorded as sent.
    Sent {
        /// The number assigned to the message.
        sequence_number: SequenceNumber,
    },
    /// The draft was dropped; nothing was recorded.
    DiscardPrompt,
    /// The message was handed to the archive.
    Stored {
        /// The preview number written with the entry.
        preview: SequenceNumber,
        /// Whether the archive accepted the entry.
        persisted: bool,
    },
    /// The trigger was not recognised; nothing changed.
    InvalidChoice(i32),
}

impl DispositionOutcome {
    /// Returns the status text for this outcome.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Sent { .. } => SENT,
            Self::DiscardPrompt => DISCARD_PROMPT,
            Self::Stored { .. } => STORED,
            Self::InvalidChoice(_) => INVALID_CHOICE,
        }
    }
}

impl fmt::Display for DispositionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
