//! Error type for disposition parsing.

use thiserror::Error;

/// Error returned when a disposition trigger is not 1, 2, or 3.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("unknown disposition trigger: {0}")]
pub struct UnknownDispositionError(pub i32);
