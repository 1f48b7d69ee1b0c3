//! `QuickChat`: message validation and hashing core.
//!
//! This crate provides the logic behind a small chat front end: checking
//! message identifiers, recipient numbers, and bodies; deriving message
//! fingerprints; and recording, discarding, or archiving composed messages.
//!
//! # Architecture
//!
//! `QuickChat` follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (files, memory)
//!
//! # Modules
//!
//! - [`message`]: Validation, hashing, and disposition dispatch

pub mod message;
