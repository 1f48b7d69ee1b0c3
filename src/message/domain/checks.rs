//! Outcomes of the field checks performed before a message is dispatched.
//!
//! Each outcome renders the exact status text shown to the user through
//! [`fmt::Display`].

use std::fmt;

/// Status text for a body within the hard limit.
pub const MESSAGE_READY: &str = "Message ready to send.";

/// Status text for an absent body.
pub const MESSAGE_MISSING: &str = "Message cannot be null.";

/// Status text for an accepted recipient number.
pub const PHONE_CAPTURED: &str = "Cell phone number successfully captured.";

/// Status text for a rejected recipient number.
pub const PHONE_REJECTED: &str = "Cell phone number is incorrectly formatted or does not contain an international code. Please correct the number and try again.";

/// Result of checking a message body against the hard length limit.
///
/// # Examples
///
/// ```
/// use quickchat::message::domain::LengthCheck;
///
/// let check = LengthCheck::TooLong { limit: 250, excess: 12 };
/// assert!(!check.is_ok());
/// assert_eq!(check.excess(), 12);
/// assert_eq!(
///     check.to_string(),
///     "Message exceeds 250 characters by 12, please reduce size."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthCheck {
    /// The body fits within the limit.
    Ready,
    /// The body is longer than the limit.
    TooLong {
        /// The configured maximum length in characters.
        limit: usize,
        /// Characters over the limit.
        excess: usize,
    },
    /// No body was supplied.
    Missing,
}

impl LengthCheck {
    /// Returns `true` when the body may be sent.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns the number of characters over the limit, or zero.
    #[must_use]
    pub const fn excess(&self) -> usize {
        match self {
            Self::TooLong { excess, .. } => *excess,
            Self::Ready | Self::Missing => 0,
        }
    }
}

impl fmt::Display for LengthCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str(MESSAGE_READY),
            Self::TooLong { limit, excess } => write!(
                f,
                "Message exceeds {limit} characters by {excess}, please reduce size."
            ),
            Self::Missing => f.write_str(MESSAGE_MISSING),
        }
    }
}

/// Result of checking a recipient phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneCheck {
    /// The number carries an international code and only digits.
    Captured,
    /// The number is malformed.
    Rejected,
}

impl PhoneCheck {
    /// Returns `true` for an accepted number.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Captured)
    }
}

impl From<bool> for PhoneCheck {
    fn from(valid: bool) -> Self {
        if valid { Self::Captured } else { Self::Rejected }
    }
}

impl fmt::Display for PhoneCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Captured => f.write_str(PHONE_CAPTURED),
            Self::Rejected => f.write_str(PHONE_REJECTED),
        }
    }
}
