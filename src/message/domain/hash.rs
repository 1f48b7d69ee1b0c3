//! Message fingerprints derived from identifier, sequence, and body text.
//!
//! The fingerprint is a display and audit aid, not a cryptographic digest:
//! `"<first two identifier chars>:<sequence>:<FIRST WORD><LAST WORD>"`.

use super::{MessageIdentifier, SequenceNumber};
use std::fmt;

/// Number of leading identifier characters carried into the hash.
const IDENTIFIER_PREFIX_CHARS: usize = 2;

/// A computed message fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageHash(String);

impl MessageHash {
    /// Returns the fingerprint text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the hash, returning its text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of hashing a message.
///
/// The identifier-too-short case renders as the empty string so callers
/// that display or persist hashes keep the historical wire text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashOutcome {
    /// The fingerprint was derived.
    Computed(MessageHash),
    /// The identifier has fewer than two characters.
    IdentifierTooShort,
}

impl HashOutcome {
    /// Returns the wire text: the fingerprint, or `""` when degenerate.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Computed(hash) => hash.as_str(),
            Self::IdentifierTooShort => "",
        }
    }

    /// Returns the computed hash, if any.
    #[must_use]
    pub const fn hash(&self) -> Option<&MessageHash> {
        match self {
            Self::Computed(hash) => Some(hash),
            Self::IdentifierTooShort => None,
        }
    }

    /// Returns `true` when a fingerprint was derived.
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

impl fmt::Display for HashOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives the fingerprint for a message.
///
/// The body is trimmed and split on runs of whitespace. Non-letter
/// characters are stripped from the first and last words before they are
/// uppercased; a single-word body uses that word twice.
///
/// # Examples
///
/// ```
/// use quickchat::message::domain::{MessageIdentifier, SequenceNumber, compute_hash};
///
/// let id = MessageIdentifier::new("1234567890");
/// let hash = compute_hash(&id, SequenceNumber::ZERO, "Hi Mike, can you join us for dinner tonight");
/// assert_eq!(hash.as_str(), "12:0:HITONIGHT");
///
/// let short = compute_hash(&MessageIdentifier::new("7"), SequenceNumber::new(1), "Hello");
/// assert!(!short.is_computed());
/// assert_eq!(short.as_str(), "");
/// ```
#[must_use]
pub fn compute_hash(
    identifier: &MessageIdentifier,
    sequence: SequenceNumber,
    body: &str,
) -> HashOutcome {
    if identifier.char_count() < IDENTIFIER_PREFIX_CHARS {
        return HashOutcome::IdentifierTooShort;
    }

    let prefix: String = identifier
        .as_str()
        .chars()
        .take(IDENTIFIER_PREFIX_CHARS)
        .collect();

    let mut words = split_words(body);
    let first = words.next().map(letters_only).unwrap_or_default();
    let last = words.last().map_or_else(|| first.clone(), letters_only);

    HashOutcome::Computed(MessageHash(format!(
        "{prefix}:{sequence}:{}{}",
        first.to_ascii_uppercase(),
        last.to_ascii_uppercase()
    )))
}

fn split_words(body: &str) -> impl Iterator<Item = &str> {
    body.trim_matches(|c: char| c <= ' ')
        .split(is_word_separator)
        .filter(|word| !word.is_empty())
}

/// Space, tab, newline, vertical tab, form feed, or carriage return.
const fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

fn letters_only(word: &str) -> String {
    word.chars().filter(char::is_ascii_alphabetic).collect()
}
