//! Identifier and sequence newtypes for composed messages.
//!
//! Message identifiers are caller-visible strings rather than UUIDs: the
//! chat front end shows them to the user and the hash embeds their first
//! two characters.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits in a generated message identifier.
pub const GENERATED_IDENTIFIER_DIGITS: usize = 10;

/// External key of a composed message.
///
/// The core does not enforce length or uniqueness on identifiers supplied
/// by callers; use [`crate::message::ports::MessageValidator`] to check the
/// length rule before dispatching.
///
/// # Examples
///
/// ```
/// use quickchat::message::domain::MessageIdentifier;
///
/// let id = MessageIdentifier::new("1234567890");
/// assert_eq!(id.as_str(), "1234567890");
/// assert_eq!(id.char_count(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageIdentifier(String);

impl MessageIdentifier {
    /// Wraps a caller-supplied identifier without validation.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a random identifier of ten decimal digits.
    ///
    /// Each digit is drawn independently and uniformly from `0-9`. Two calls
    /// may return the same identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use quickchat::message::domain::MessageIdentifier;
    ///
    /// let id = MessageIdentifier::generate(&mut rand::thread_rng());
    /// assert_eq!(id.as_str().len(), 10);
    /// assert!(id.as_str().chars().all(|c| c.is_ascii_digit()));
    /// ```
    #[must_use]
    pub fn generate(rng: &mut impl Rng) -> Self {
        let digits = (0..GENERATED_IDENTIFIER_DIGITS)
            .map(|_| char::from(b'0' + rng.gen_range(0..10_u8)))
            .collect();
        Self(digits)
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier length in characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<&str> for MessageIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MessageIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for MessageIdentifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates a message identifier using the thread-local RNG.
#[must_use]
pub fn generate_identifier() -> MessageIdentifier {
    MessageIdentifier::generate(&mut rand::thread_rng())
}

/// Position of a sent message in the running count.
///
/// The count starts at zero before anything is sent and each accepted send
/// takes the next value, so the first sent message is number 1.
///
/// # Examples
///
/// ```
/// use quickchat::message::domain::SequenceNumber;
///
/// let seq = SequenceNumber::ZERO;
/// assert_eq!(seq.value(), 0);
/// assert_eq!(seq.next().value(), 1);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SequenceNumber(u64);

impl SequenceNumber {
    /// The count before any message has been sent.
    pub const ZERO: Self = Self(0);

    /// Creates a sequence number from a value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying sequence value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the next sequence number.
    ///
    /// Saturates at `u64::MAX`.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for SequenceNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
