//! Individual validation rule implementations.
//!
//! Each rule is a pure function over raw caller input and the configured
//! limits. Lengths are counted in characters, not bytes.

use crate::message::{domain::LengthCheck, ports::validator::ValidationConfig};

/// Prefix every recipient number must carry.
const INTERNATIONAL_PREFIX: char = '+';

/// Returns `true` when `identifier` is no longer than the identifier limit.
///
/// No character set is enforced.
#[must_use]
pub fn is_valid_identifier(identifier: &str, config: &ValidationConfig) -> bool {
    identifier.chars().count() <= config.max_identifier_chars
}

/// Returns `true` for `+` followed by one or more ASCII digits, within the
/// phone length limit.
///
/// # Examples
///
/// ```
/// use quickchat::message::{ports::ValidationConfig, validation::rules::is_valid_phone_number};
///
/// let config = ValidationConfig::default();
/// assert!(is_valid_phone_number("+27718693002", &config));
/// assert!(!is_valid_phone_number("08575975889", &config));
/// assert!(!is_valid_phone_number("+", &config));
/// ```
#[must_use]
pub fn is_valid_phone_number(phone: &str, config: &ValidationConfig) -> bool {
    let Some(digits) = phone.strip_prefix(INTERNATIONAL_PREFIX) else {
        return false;
    };

    phone.chars().count() <= config.max_phone_chars
        && !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
}

/// Checks a body against the hard length limit.
#[must_use]
pub fn check_length(body: Option<&str>, config: &ValidationConfig) -> LengthCheck {
    let Some(text) = body else {
        return LengthCheck::Missing;
    };

    let length = text.chars().count();
    if length <= config.max_body_chars {
        LengthCheck::Ready
    } else {
        LengthCheck::TooLong {
            limit: config.max_body_chars,
            excess: length - config.max_body_chars,
        }
    }
}

/// Returns the advisory notice for bodies over the soft limit.
#[must_use]
pub fn soft_limit_notice(body: &str, config: &ValidationConfig) -> Option<String> {
    (body.chars().count() > config.soft_body_chars).then(|| {
        format!(
            "Please enter a message of less than {} characters.",
            config.soft_body_chars
        )
    })
}
