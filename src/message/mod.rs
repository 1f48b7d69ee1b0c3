//! Message validation, hashing, and disposition for `QuickChat`.
//!
//! This module checks composed messages, derives their fingerprints, and
//! applies the caller's send, discard, or store choice.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types ([`domain::DraftMessage`], [`domain::MessageRecord`], [`domain::MessageStore`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::validator::MessageValidator`], [`ports::archive::MessageArchive`])
//! - **Adapters**: Concrete archives ([`adapters::memory::InMemoryMessageArchive`], [`adapters::json_file::JsonFileArchive`])
//! - **Validation**: Field rules and the default validator
//! - **Services**: Disposition dispatch ([`services::MessageService`])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use mockable::DefaultClock;
//! use quickchat::message::adapters::memory::InMemoryMessageArchive;
//! use quickchat::message::domain::{DraftMessage, generate_identifier};
//! use quickchat::message::ports::validator::MessageValidator;
//! use quickchat::message::services::MessageService;
//! use quickchat::message::validation::DefaultMessageValidator;
//!
//! let validator = DefaultMessageValidator::new();
//! let identifier = generate_identifier();
//! assert!(validator.is_valid_identifier(identifier.as_str()));
//! assert!(validator.check_phone_number("+27718693002").is_ok());
//! assert!(validator.check_length(Some("Hello world")).is_ok());
//!
//! let mut service = MessageService::new(
//!     Arc::new(InMemoryMessageArchive::new()),
//!     Arc::new(DefaultClock),
//! );
//! let draft = DraftMessage::new(identifier, "+27718693002", "Hello world");
//! assert_eq!(service.dispatch(1, &draft).to_string(), "Message successfully sent.");
//! assert_eq!(service.total_sent(), 1);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
