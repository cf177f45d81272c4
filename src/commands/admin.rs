//! Handlers for the donor search and admin review commands.

use super::write_json_line;
use hub_views::{requested_items, SubmissionQueue};
use std::io::Write;

/// Review action on the submission queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionAction {
    List,
    Accept(usize),
    Reject(usize),
}

/// Print the requested items for a donor search category.
pub fn run_requested_items<W: Write>(search: &str, out: &mut W) -> anyhow::Result<()> {
    for item in requested_items(search)? {
        write_json_line(out, &item)?;
    }
    Ok(())
}

/// Apply one review action to the seeded queue, then print the reviewed
/// submission (if any) followed by what is still pending.
pub fn run_submissions<W: Write>(action: SubmissionAction, out: &mut W) -> anyhow::Result<()> {
    let mut queue = SubmissionQueue::seeded();

    let reviewed = match action {
        SubmissionAction::List => None,
        SubmissionAction::Accept(index) => Some(queue.accept(index)?),
        SubmissionAction::Reject(index) => Some(queue.reject(index)?),
    };
    if let Some(reviewed) = reviewed {
        write_json_line(out, &reviewed)?;
    }

    for submission in queue.pending() {
        write_json_line(out, submission)?;
    }
    Ok(())
}
