//! Archive adapters for the message module.
//!
//! This module provides concrete implementations of the [`MessageArchive`]
//! port. Adapters handle all storage concerns while the domain stays pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryMessageArchive`]: Thread-safe in-memory storage
//! - [`json_file::JsonFileArchive`]: Append-only file of comma-terminated
//!   JSON objects
//!
//! [`MessageArchive`]: crate::message::ports::archive::MessageArchive

pub mod json_file;
pub mod memory;
