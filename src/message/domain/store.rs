//! In-memory log of sent messages and the running count.

use super::{DraftMessage, MessageRecord, SequenceNumber};

/// Report returned when nothing has been sent.
pub const NO_MESSAGES_SENT: &str = "No messages sent yet.";

const REPORT_BANNER: &str = "=== SENT MESSAGES ===";
const REPORT_RULE: &str = "------------------------";

/// Sent messages in insertion order together with the running count.
///
/// The count only moves on [`MessageStore::record_sent`] and is always equal
/// to the sequence number of the most recent record.
///
/// # Examples
///
/// ```
/// use quickchat::message::domain::{DraftMessage, MessageStore};
///
/// let mut store = MessageStore::new();
/// assert_eq!(store.format_all_sent(), "No messages sent yet.");
///
/// let record = store.record_sent(&DraftMessage::new("1234567890", "+27718693002", "Hi there"));
/// assert_eq!(record.sequence_number().value(), 1);
/// assert_eq!(store.total_sent(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageStore {
    records: Vec<MessageRecord>,
    sent_count: SequenceNumber,
}

impl MessageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the count and records `draft` as the next sent message.
    ///
    /// Returns a copy of the created record.
    pub fn record_sent(&mut self, draft: &DraftMessage) -> MessageRecord {
        self.sent_count = self.sent_count.next();
        let record = MessageRecord::from_draft(draft, self.sent_count);
        self.records.push(record.clone());
        record
    }

    /// Returns the number the next sent message would receive.
    #[must_use]
    pub const fn preview_sequence(&self) -> SequenceNumber {
        self.sent_count.next()
    }

    /// Returns the running count of sent messages.
    #[must_use]
    pub const fn total_sent(&self) -> u64 {
        self.sent_count.value()
    }

    /// Returns the sent messages in insertion order.
    #[must_use]
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Removes every record and resets the count to zero.
    pub fn reset(&mut self) {
        self.records.clear();
        self.sent_count = SequenceNumber::ZERO;
    }

    /// Renders every sent message as a labelled block.
    ///
    /// Returns [`NO_MESSAGES_SENT`] when the store is empty.
    #[must_use]
    pub fn format_all_sent(&self) -> String {
        if self.records.is_empty() {
            return NO_MESSAGES_SENT.to_owned();
        }

        let mut report = String::new();
        report.push_str(REPORT_BANNER);
        report.push('\n');
        for record in &self.records {
            push_record(&mut report, record);
        }
        report
    }
}

fn push_record(report: &mut String, record: &MessageRecord) {
    let lines = [
        ("Message ID", record.identifier().as_str()),
        ("Message Hash", record.hash().as_str()),
        ("Recipient", record.recipient()),
        ("Message", record.body()),
    ];
    for (label, value) in lines {
        report.push_str(label);
        report.push_str(": ");
        report.push_str(value);
        report.push('\n');
    }
    report.push_str(REPORT_RULE);
    report.push('\n');
}
