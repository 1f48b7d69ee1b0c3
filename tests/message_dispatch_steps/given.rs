//! Given steps for message dispatch scenarios.

use super::world::DispatchWorld;
use quickchat::message::domain::DraftMessage;
use rstest_bdd_macros::given;

#[given("a message service with an in-memory archive")]
fn message_service(world: &mut DispatchWorld) {
    *world = DispatchWorld::default();
}

#[given(r#"a draft "{identifier}" to "{recipient}" saying "{body}""#)]
fn a_draft(world: &mut DispatchWorld, identifier: String, recipient: String, body: String) {
    world.draft = Some(DraftMessage::new(identifier, recipient, body));
}
