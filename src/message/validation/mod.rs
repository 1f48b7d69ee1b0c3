//! Field validation implementation.
//!
//! This module provides the individual rules and the default validator
//! service built from them.

pub mod rules;
pub mod service;

pub use service::DefaultMessageValidator;
