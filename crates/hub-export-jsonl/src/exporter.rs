//! JSONL exporter for generated batches.

use crate::args::ExportTable;
use crate::error::ExportError;
use hub_core::Dataset;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from exporting one collection.
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetrics {
    /// Collection that was written.
    pub table: &'static str,
    /// Number of rows written.
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    #[serde(skip)]
    pub total_duration: Duration,
}

impl ExportMetrics {
    fn new(table: ExportTable) -> Self {
        Self {
            table: table.name(),
            rows_written: 0,
            file_size_bytes: 0,
            total_duration: Duration::ZERO,
        }
    }

    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes a batch as JSON Lines, one file per collection.
pub struct JsonlExporter<'a> {
    dataset: &'a Dataset,
}

impl<'a> JsonlExporter<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Export the given collections into `output_dir`, creating it if needed.
    pub fn export<P: AsRef<Path>>(
        &self,
        output_dir: P,
        tables: &[ExportTable],
    ) -> Result<Vec<ExportMetrics>, ExportError> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        tables
            .iter()
            .map(|table| self.export_table(*table, output_dir.join(table.file_name())))
            .collect()
    }

    /// Export one collection to `output_path`.
    pub fn export_table<P: AsRef<Path>>(
        &self,
        table: ExportTable,
        output_path: P,
    ) -> Result<ExportMetrics, ExportError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!(
            "Writing {} to JSONL file '{}'",
            table.name(),
            output_path.display()
        );

        let file = File::create(output_path)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        let mut metrics = ExportMetrics::new(table);
        metrics.rows_written = match table {
            ExportTable::Organizations => {
                write_rows(&mut writer, self.dataset.directory().entries())?
            }
            ExportTable::Posts => write_rows(&mut writer, self.dataset.posts().iter())?,
            ExportTable::Donations => write_rows(&mut writer, self.dataset.donations().iter())?,
        };

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "JSONL export of {} complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.table,
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

fn write_rows<W, I, T>(writer: &mut W, rows: I) -> Result<u64, ExportError>
where
    W: Write,
    I: Iterator<Item = T>,
    T: Serialize,
{
    let mut written = 0u64;
    for row in rows {
        serde_json::to_writer(&mut *writer, &row)?;
        writeln!(writer)?;
        written += 1;

        if written % 500 == 0 {
            debug!("Written {} rows", written);
        }
    }
    Ok(written)
}
