//! Domain types for the message subsystem.
//!
//! Pure types with no infrastructure dependencies: identifiers, hashes,
//! check outcomes, drafts, records, and the in-memory sent-message store.

mod checks;
mod disposition;
mod error;
mod hash;
mod ids;
mod record;
mod store;
mod stored;

pub use checks::{
    LengthCheck, MESSAGE_MISSING, MESSAGE_READY, PHONE_CAPTURED, PHONE_REJECTED, PhoneCheck,
};
pub use disposition::{
    DISCARD_PROMPT, Disposition, DispositionOutcome, INVALID_CHOICE, SENT, STORED,
};
pub use error::UnknownDispositionError;
pub use hash::{HashOutcome, MessageHash, compute_hash};
pub use ids::{GENERATED_IDENTIFIER_DIGITS, MessageIdentifier, SequenceNumber, generate_identifier};
pub use record::{DraftMessage, MessageRecord};
pub use store::{MessageStore, NO_MESSAGES_SENT};
pub use stored::{ENTRY_TERMINATOR, StoredMessage};
