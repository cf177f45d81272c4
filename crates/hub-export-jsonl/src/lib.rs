//! JSON Lines exporter for donation-hub batches.
//!
//! Writes organizations, posts and donations of a generated batch to
//! `organizations.jsonl`, `posts.jsonl` and `donations.jsonl`.
//!
//! # Example
//!
//! ```ignore
//! use hub_export_jsonl::{ExportTable, JsonlExporter};
//!
//! let exporter = JsonlExporter::new(&dataset);
//! let metrics = exporter.export("out", &ExportTable::ALL)?;
//! for m in metrics {
//!     println!("{}: {} rows", m.table, m.rows_written);
//! }
//! ```

pub mod args;
pub mod error;
pub mod exporter;

pub use args::{ExportTable, JsonlExportArgs};
pub use error::ExportError;
pub use exporter::{ExportMetrics, JsonlExporter};
