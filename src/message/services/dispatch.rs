//! Disposition dispatch for composed messages.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info, warn};

use crate::message::{
    domain::{
        Disposition, DispositionOutcome, DraftMessage, MessageRecord, MessageStore, StoredMessage,
    },
    ports::archive::MessageArchive,
};

/// Applies send, discard, and store dispositions to drafts.
///
/// The service owns the sent-message store. It takes `&mut self` for every
/// mutation and has no internal locking; share it behind a mutex if more
/// than one caller needs it.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mockable::DefaultClock;
/// use quickchat::message::adapters::memory::InMemoryMessageArchive;
/// use quickchat::message::domain::DraftMessage;
/// use quickchat::message::services::MessageService;
///
/// let archive = Arc::new(InMemoryMessageArchive::new());
/// let mut service = MessageService::new(Arc::clone(&archive), Arc::new(DefaultClock));
///
/// let draft = DraftMessage::new("1234567890", "+27718693002", "Test message");
/// assert_eq!(service.dispatch(1, &draft).to_string(), "Message successfully sent.");
/// assert_eq!(service.dispatch(3, &draft).to_string(), "Message successfully stored.");
/// assert_eq!(service.total_sent(), 1);
/// assert_eq!(archive.len(), 1);
/// ```
#[derive(Debug)]
pub struct MessageService<A, C>
where
    A: MessageArchive,
    C: Clock + Send + Sync,
{
    store: MessageStore,
    archive: Arc<A>,
    clock: Arc<C>,
}

impl<A, C> MessageService<A, C>
where
    A: MessageArchive,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty store.
    #[must_use]
    pub fn new(archive: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            store: MessageStore::new(),
            archive,
            clock,
        }
    }

    /// Dispatches `draft` according to a numeric menu trigger.
    ///
    /// `1` sends, `2` discards, `3` stores; any other value changes nothing
    /// and yields [`DispositionOutcome::InvalidChoice`].
    pub fn dispatch(&mut self, trigger: i32, draft: &DraftMessage) -> DispositionOutcome {
        match Disposition::try_from(trigger) {
            Ok(disposition) => self.apply(disposition, draft),
            Err(err) => {
                debug!(%err, "ignoring disposition");
                DispositionOutcome::InvalidChoice(trigger)
            }
        }
    }

    /// Applies a disposition to `draft`.
    pub fn apply(&mut self, disposition: Disposition, draft: &DraftMessage) -> DispositionOutcome {
        match disposition {
            Disposition::Send => {
                let record = self.store.record_sent(draft);
                debug!(
                    message_id = %record.identifier(),
                    sequence_number = record.sequence_number().value(),
                    "message sent"
                );
                DispositionOutcome::Sent {
                    sequence_number: record.sequence_number(),
                }
            }
            Disposition::Discard => DispositionOutcome::DiscardPrompt,
            Disposition::Store => self.store_for_later(draft),
        }
    }

    fn store_for_later(&self, draft: &DraftMessage) -> DispositionOutcome {
        let preview = self.store.preview_sequence();
        let entry = StoredMessage::from_draft(draft, preview, &*self.clock);
        let persisted = match self.archive.append(&entry) {
            Ok(()) => {
                info!(
                    message_id = entry.message_id(),
                    message_number = entry.message_number(),
                    "message stored"
                );
                true
            }
            Err(err) => {
                warn!(
                    message_id = entry.message_id(),
                    error = %err,
                    "failed to store message"
                );
                false
            }
        };
        DispositionOutcome::Stored { preview, persisted }
    }

    /// Renders every sent message, or `"No messages sent yet."`.
    #[must_use]
    pub fn format_all_sent(&self) -> String {
        self.store.format_all_sent()
    }

    /// Returns the running count of sent messages.
    #[must_use]
    pub const fn total_sent(&self) -> u64 {
        self.store.total_sent()
    }

    /// Returns the sent messages in insertion order.
    #[must_use]
    pub fn sent_messages(&self) -> &[MessageRecord] {
        self.store.records()
    }

    /// Clears the sent messages and resets the count to zero.
    pub fn reset(&mut self) {
        self.store.reset();
    }
}
