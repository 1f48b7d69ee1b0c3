//! Shared world state for message dispatch BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use quickchat::message::{
    adapters::memory::InMemoryMessageArchive,
    domain::{DispositionOutcome, DraftMessage},
    services::MessageService,
    validation::DefaultMessageValidator,
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestMessageService = MessageService<InMemoryMessageArchive, DefaultClock>;

/// Scenario world for message dispatch behaviour tests.
pub struct DispatchWorld {
    /// The dispatch service under test.
    pub service: TestMessageService,
    /// Archive shared with the service.
    pub archive: Arc<InMemoryMessageArchive>,
    /// Validator with default limits.
    pub validator: DefaultMessageValidator,
    /// Draft composed by the last given step.
    pub draft: Option<DraftMessage>,
    /// Outcome of the last dispatch.
    pub last_outcome: Option<DispositionOutcome>,
    /// Status text of the last field check.
    pub last_check: Option<String>,
}

impl Default for DispatchWorld {
    fn default() -> Self {
        let archive = Arc::new(InMemoryMessageArchive::new());
        let service = MessageService::new(Arc::clone(&archive), Arc::new(DefaultClock));
        Self {
            service,
            archive,
            validator: DefaultMessageValidator::new(),
            draft: None,
            last_outcome: None,
            last_check: None,
        }
    }
}

/// Fixture providing a fresh world for each scenario.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}
