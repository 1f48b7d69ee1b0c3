//! When steps for message dispatch scenarios.

use super::world::DispatchWorld;
use eyre::eyre;
use quickchat::message::ports::validator::MessageValidator;
use rstest_bdd_macros::when;

#[when("the draft is dispatched with choice {choice:i32}")]
fn dispatch_draft(world: &mut DispatchWorld, choice: i32) -> Result<(), eyre::Report> {
    let draft = world.draft.as_ref().ok_or_else(|| eyre!("no draft composed"))?;
    world.last_outcome = Some(world.service.dispatch(choice, draft));
    Ok(())
}

#[when(r#"the recipient "{phone}" is checked"#)]
fn check_recipient(world: &mut DispatchWorld, phone: String) {
    world.last_check = Some(world.validator.describe_phone_result(&phone));
}

#[when(r#"the body "{body}" is checked"#)]
fn check_body(world: &mut DispatchWorld, body: String) {
    world.last_check = Some(world.validator.describe_length_result(Some(&body)));
}
