//! CLI argument definitions for the JSONL exporter.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Collections that can be exported, one file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTable {
    Organizations,
    Posts,
    Donations,
}

impl ExportTable {
    pub const ALL: [ExportTable; 3] = [
        ExportTable::Organizations,
        ExportTable::Posts,
        ExportTable::Donations,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExportTable::Organizations => "organizations",
            ExportTable::Posts => "posts",
            ExportTable::Donations => "donations",
        }
    }

    /// File the collection is written to inside the output directory.
    pub fn file_name(&self) -> String {
        format!("{}.jsonl", self.name())
    }
}

/// JSONL-specific export arguments.
#[derive(Args, Clone, Debug)]
pub struct JsonlExportArgs {
    /// Output directory for JSONL files (one file per collection)
    #[arg(long, short = 'o')]
    pub output_dir: PathBuf,

    /// Collections to export (comma-separated, empty = all)
    #[arg(long, value_delimiter = ',', value_enum)]
    pub tables: Vec<ExportTable>,
}

impl JsonlExportArgs {
    /// Requested collections, defaulting to all of them.
    pub fn selected_tables(&self) -> Vec<ExportTable> {
        if self.tables.is_empty() {
            ExportTable::ALL.to_vec()
        } else {
            self.tables.clone()
        }
    }
}
