//! Then steps for message dispatch scenarios.

use super::world::DispatchWorld;
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::then;

#[then(r#"the status is "{status}""#)]
fn status_is(world: &DispatchWorld, status: String) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre!("nothing dispatched"))?;
    if outcome.message() != status {
        return Err(eyre!("expected status '{status}', got '{outcome}'"));
    }
    Ok(())
}

#[then("the total sent count is {count:u64}")]
fn total_sent_is(world: &DispatchWorld, count: u64) -> Result<(), eyre::Report> {
    let total = world.service.total_sent();
    if total != count {
        return Err(eyre!("expected {count} sent messages, found {total}"));
    }
    Ok(())
}

#[then(r#"the sent report contains "{text}""#)]
fn report_contains(world: &DispatchWorld, text: String) -> Result<(), eyre::Report> {
    let report = world.service.format_all_sent();
    if !report.contains(&text) {
        return Err(eyre!("report does not contain '{text}':\n{report}"));
    }
    Ok(())
}

#[then(r#"the sent report is "{text}""#)]
fn report_is(world: &DispatchWorld, text: String) -> Result<(), eyre::Report> {
    let report = world.service.format_all_sent();
    if report != text {
        return Err(eyre!("expected report '{text}', got '{report}'"));
    }
    Ok(())
}

#[then("the archive holds {count:usize} entries")]
fn archive_holds(world: &DispatchWorld, count: usize) -> Result<(), eyre::Report> {
    let entries = world.archive.entries().wrap_err("read archive")?;
    if entries.len() != count {
        return Err(eyre!("expected {count} archived entries, found {}", entries.len()));
    }
    Ok(())
}

#[then(r#"the last archived entry has number {number:u64} and hash "{hash}""#)]
fn last_entry_matches(
    world: &DispatchWorld,
    number: u64,
    hash: String,
) -> Result<(), eyre::Report> {
    let entries = world.archive.entries().wrap_err("read archive")?;
    let entry = entries.last().ok_or_else(|| eyre!("archive is empty"))?;
    if entry.message_number() != number || entry.message_hash() != hash {
        return Err(eyre!(
            "expected entry {number} with hash '{hash}', got {} with '{}'",
            entry.message_number(),
            entry.message_hash()
        ));
    }
    Ok(())
}

#[then(r#"the check reports "{text}""#)]
fn check_reports(world: &DispatchWorld, text: String) -> Result<(), eyre::Report> {
    let check = world
        .last_check
        .as_ref()
        .ok_or_else(|| eyre!("no field checked"))?;
    if *check != text {
        return Err(eyre!("expected check '{text}', got '{check}'"));
    }
    Ok(())
}
