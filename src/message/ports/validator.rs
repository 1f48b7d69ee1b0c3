//! Validator port for composed-message fields.
//!
//! Defines the checks a caller runs on an identifier, recipient number, and
//! body before choosing a disposition.

use crate::message::domain::{LengthCheck, PhoneCheck};

/// Port for field validation.
///
/// Every check is total: malformed or absent input produces an outcome,
/// never an error.
///
/// # Implementation Notes
///
/// Implementations should be stateless and thread-safe.
pub trait MessageValidator: Send + Sync {
    /// Returns `true` when the identifier is within the length limit.
    fn is_valid_identifier(&self, identifier: &str) -> bool;

    /// Returns `true` when the number is `+` followed only by digits and
    /// within the length limit.
    fn is_valid_phone_number(&self, phone: &str) -> bool;

    /// Checks a body against the hard length limit.
    ///
    /// `None` represents an absent body.
    fn check_length(&self, body: Option<&str>) -> LengthCheck;

    /// Checks a recipient number.
    fn check_phone_number(&self, phone: &str) -> PhoneCheck {
        PhoneCheck::from(self.is_valid_phone_number(phone))
    }

    /// Returns the status text for a body length check.
    fn describe_length_result(&self, body: Option<&str>) -> String {
        self.check_length(body).to_string()
    }

    /// Returns the status text for a recipient number check.
    fn describe_phone_result(&self, phone: &str) -> String {
        self.check_phone_number(phone).to_string()
    }

    /// Returns an advisory notice when the body passes the soft limit.
    ///
    /// The notice never blocks sending.
    fn soft_limit_notice(&self, body: &str) -> Option<String>;
}

/// Limits applied by the validator.
///
/// # Examples
///
/// ```
/// use quickchat::message::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_identifier_chars, 10);
/// assert_eq!(config.max_phone_chars, 13);
/// assert_eq!(config.max_body_chars, 250);
/// assert_eq!(config.soft_body_chars, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum identifier length in characters.
    pub max_identifier_chars: usize,
    /// Maximum phone number length in characters, including the `+`.
    pub max_phone_chars: usize,
    /// Maximum body length in characters.
    pub max_body_chars: usize,
    /// Body length above which an advisory notice is shown.
    pub soft_body_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_identifier_chars: 10,
            max_phone_chars: 13,
            max_body_chars: 250,
            soft_body_chars: 50,
        }
    }
}
