//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces the dispatcher requires. Adapters
//! implement them to connect the core to files, memory, and other storage.

pub mod archive;
pub mod validator;

pub use archive::{ArchiveResult, MessageArchive};
pub use validator::{MessageValidator, ValidationConfig};
