//! Command-line interface for donation-hub
//!
//! # Usage Examples
//!
//! ```bash
//! # Export a batch (defaults: seed 42, 1000 posts, 1000 donations)
//! donation-hub generate --output-dir out
//!
//! # Use a config file and override the seed
//! donation-hub --config hub.yaml --seed 7 summary
//!
//! # Posts for the representative's own organization
//! donation-hub posts --default-organization --status fulfilled
//!
//! # Donors of a post, or of every unfulfilled post
//! donation-hub donors 42
//! donation-hub donors unfulfilled
//! donation-hub donors fulfilled --remove 0
//!
//! # Admin review queue
//! donation-hub submissions --accept 0
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=hub_generator=debug`).

use anyhow::Context;
use clap::{Parser, Subcommand};
use donation_hub::commands::{self, PostFilter, PostStatus, SubmissionAction};
use donation_hub::GenerationOpts;
use hub_core::Category;
use hub_export_jsonl::JsonlExportArgs;
use std::io::Write;

#[derive(Parser)]
#[command(name = "donation-hub")]
#[command(about = "Generate and query donation posts and donations")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    generation: GenerationOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch and export it as JSONL files
    Generate {
        #[command(flatten)]
        args: JsonlExportArgs,
    },

    /// List post categories
    Categories,

    /// List posts
    Posts {
        /// Only posts of the organization with this name
        #[arg(long, conflicts_with = "default_organization")]
        organization: Option<String>,

        /// Only posts of the default organization
        #[arg(long)]
        default_organization: bool,

        /// Only fulfilled or unfulfilled posts
        #[arg(long, value_enum)]
        status: Option<PostStatus>,

        /// Only posts of this category (e.g. "Medical Supplies")
        #[arg(long)]
        category: Option<Category>,
    },

    /// List donors: all, by post id, or `fulfilled` / `unfulfilled`
    Donors {
        /// Post id or status keyword
        selector: Option<String>,

        /// Drop the listed donor at this index (fulfilled posts only)
        #[arg(long)]
        remove: Option<usize>,
    },

    /// Print batch counts
    Summary,

    /// List requested items for a donor search category
    RequestedItems {
        /// Search category (e.g. "food", "all categories")
        search: String,
    },

    /// Review pending organization submissions
    Submissions {
        /// Accept the pending submission at this index
        #[arg(long, conflicts_with = "reject")]
        accept: Option<usize>,

        /// Reject the pending submission at this index
        #[arg(long)]
        reject: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Generate { args } => {
            let config = cli.generation.load_config()?;
            commands::run_generate(&config, &args, &mut out)?;
        }
        Commands::Categories => commands::run_categories(&mut out)?,
        Commands::Posts {
            organization,
            default_organization,
            status,
            category,
        } => {
            let config = cli.generation.load_config()?;
            let ctx = commands::build_context(&config)?;
            let filter = PostFilter {
                organization,
                default_organization,
                status,
                category,
            };
            commands::run_posts(&ctx, &filter, &mut out)?;
        }
        Commands::Donors { selector, remove } => {
            let config = cli.generation.load_config()?;
            let ctx = commands::build_context(&config)?;
            commands::run_donors(&ctx, selector.as_deref(), remove, &mut out)?;
        }
        Commands::Summary => {
            let config = cli.generation.load_config()?;
            let ctx = commands::build_context(&config)?;
            commands::run_summary(&ctx, &mut out)?;
        }
        Commands::RequestedItems { search } => commands::run_requested_items(&search, &mut out)?,
        Commands::Submissions { accept, reject } => {
            let action = match (accept, reject) {
                (Some(index), _) => SubmissionAction::Accept(index),
                (None, Some(index)) => SubmissionAction::Reject(index),
                (None, None) => SubmissionAction::List,
            };
            commands::run_submissions(action, &mut out)?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}
