//! Generate command handler.

use super::write_json_line;
use anyhow::Context;
use hub_core::HubConfig;
use hub_export_jsonl::{JsonlExportArgs, JsonlExporter};
use hub_generator::DataGenerator;
use std::io::Write;

/// Generate a batch and export it as JSONL files.
///
/// Prints the metrics of each written file.
pub fn run_generate<W: Write>(
    config: &HubConfig,
    args: &JsonlExportArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    tracing::info!("Output directory: {:?}", args.output_dir);

    let dataset = DataGenerator::new(config.clone())
        .generate()
        .context("Failed to generate batch")?;

    let metrics = JsonlExporter::new(&dataset)
        .export(&args.output_dir, &args.selected_tables())
        .with_context(|| format!("Failed to export batch to {:?}", args.output_dir))?;

    for m in &metrics {
        write_json_line(out, m)?;
    }
    Ok(())
}
