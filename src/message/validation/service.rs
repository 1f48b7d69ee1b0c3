//! Validation service implementation.
//!
//! Provides the default implementation of the `MessageValidator` port on top
//! of the individual rules.

use crate::message::{
    domain::LengthCheck,
    ports::validator::{MessageValidator, ValidationConfig},
    validation::rules,
};

/// Default implementation of the message validator.
///
/// # Examples
///
/// ```
/// use quickchat::message::ports::validator::MessageValidator;
/// use quickchat::message::validation::service::DefaultMessageValidator;
///
/// let validator = DefaultMessageValidator::new();
/// assert!(validator.is_valid_identifier("1234567890"));
/// assert_eq!(
///     validator.describe_phone_result("+27718693002"),
///     "Cell phone number successfully captured."
/// );
/// assert_eq!(
///     validator.describe_length_result(Some("Hi Mike, can you join us for dinner tonight")),
///     "Message ready to send."
/// );
/// assert_eq!(validator.describe_length_result(None), "Message cannot be null.");
/// ```
#[derive(Debug, Clone)]
pub struct DefaultMessageValidator {
    config: ValidationConfig,
}

impl DefaultMessageValidator {
    /// Creates a new validator with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Creates a new validator with custom limits.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current limits.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl Default for DefaultMessageValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageValidator for DefaultMessageValidator {
    fn is_valid_identifier(&self, identifier: &str) -> bool {
        rules::is_valid_identifier(identifier, &self.config)
    }

    fn is_valid_phone_number(&self, phone: &str) -> bool {
        rules::is_valid_phone_number(phone, &self.config)
    }

    fn check_length(&self, body: Option<&str>) -> LengthCheck {
        rules::check_length(body, &self.config)
    }

    fn soft_limit_notice(&self, body: &str) -> Option<String> {
        rules::soft_limit_notice(body, &self.config)
    }
}

// Note: Unit tests for DefaultMessageValidator live in
// src/message/tests/validation_tests.rs.
