//! Behaviour tests for message validation and disposition.

mod message_dispatch_steps;

use message_dispatch_steps::world::{DispatchWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/message_dispatch.feature",
    name = "Sending a message records it and advances the count"
)]
fn send_records_message(world: DispatchWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_dispatch.feature",
    name = "Storing a message archives it without advancing the count"
)]
fn store_archives_message(world: DispatchWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_dispatch.feature",
    name = "Discarding a message leaves nothing behind"
)]
fn discard_leaves_nothing(world: DispatchWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_dispatch.feature",
    name = "Unknown choices change nothing"
)]
fn unknown_choice_changes_nothing(world: DispatchWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_dispatch.feature",
    name = "A recipient without an international code is rejected"
)]
fn recipient_without_code_rejected(world: DispatchWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_dispatch.feature",
    name = "A body within the limit is ready to send"
)]
fn body_within_limit_ready(world: DispatchWorld) {
    let _ = world;
}
