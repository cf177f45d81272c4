//! Command handlers.
//!
//! Every handler writes JSON, one value per line, to the given writer.

pub mod admin;
pub mod generate;
pub mod views;

use anyhow::Context;
use hub_core::HubConfig;
use hub_generator::DataGenerator;
use hub_views::DataContext;
use serde::Serialize;
use std::io::Write;

pub use admin::{run_requested_items, run_submissions, SubmissionAction};
pub use generate::run_generate;
pub use views::{run_categories, run_donors, run_posts, run_summary, PostFilter, PostStatus};

/// Generate a batch and wrap it in a data context.
pub fn build_context(config: &HubConfig) -> anyhow::Result<DataContext> {
    let dataset = DataGenerator::new(config.clone())
        .generate()
        .context("Failed to generate batch")?;
    DataContext::from_config(dataset, config).context("Failed to build data context")
}

pub(crate) fn write_json_line<W: Write, T: Serialize>(
    out: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
