//! donation-hub library
//!
//! Generates one in-memory batch of donation posts and donations and serves
//! the views the donation-coordination application reads from it.
//!
//! # Crates
//!
//! - `hub_core` - domain types and [`HubConfig`]
//! - `hub_generator` - item generators, post/donation synthesis, batch orchestrator
//! - `hub_views` - [`DataContext`](hub_views::DataContext) and derived views
//! - `hub_export_jsonl` - JSON Lines export
//!
//! # CLI Usage
//!
//! ```bash
//! # Write organizations.jsonl, posts.jsonl and donations.jsonl
//! donation-hub generate --output-dir out --seed 7
//!
//! # Posts of one organization that are still open
//! donation-hub posts --organization "Egyptian Food Bank" --status unfulfilled
//!
//! # Donors of post 12, or of every fulfilled post
//! donation-hub donors 12
//! donation-hub donors fulfilled
//! ```

use anyhow::Context;
use clap::Args;
use hub_core::HubConfig;
use std::path::PathBuf;

pub mod commands;

/// Options controlling the generated batch, shared by every command.
#[derive(Args, Clone, Debug, Default)]
pub struct GenerationOpts {
    /// Path to config YAML file
    #[arg(long, short = 'c', global = true, env = "DONATION_HUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Random seed for the batch (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of posts to generate (overrides config)
    #[arg(long, global = true)]
    pub post_count: Option<u32>,

    /// Number of donations to generate (overrides config)
    #[arg(long, global = true)]
    pub donation_count: Option<u32>,
}

impl GenerationOpts {
    /// Load the config file, if any, and apply command-line overrides.
    pub fn load_config(&self) -> anyhow::Result<HubConfig> {
        let config = match &self.config {
            Some(path) => HubConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {path:?}"))?,
            None => HubConfig::default(),
        };
        let config = config.with_overrides(self.seed, self.post_count, self.donation_count);
        config.validate().context("Invalid generation settings")?;
        Ok(config)
    }
}
