//! Command execution logic.

use anyhow::Context;
use arff_sniff::{Converter, ConverterConfig};
use tracing::info;

use crate::cli::args::{Cli, OutputFormat};
use crate::cli::output::{display_completion_summary, display_progress, print_json_summary};

/// Convert every candidate file in the requested directory
pub fn convert_command(cli: &Cli) -> anyhow::Result<()> {
    let converter = Converter::new(ConverterConfig::default())
        .context("Invalid converter configuration")?;

    let show_progress = !cli.quiet && cli.format == OutputFormat::Text;
    let summary = converter
        .convert_directory(&cli.dir, |event| {
            if show_progress {
                display_progress(event);
            }
        })
        .with_context(|| format!("Conversion failed in {}", cli.dir.display()))?;

    info!(
        "Finished: {} files, {} rows",
        summary.files_converted(),
        summary.total_rows()
    );

    match cli.format {
        OutputFormat::Json => print_json_summary(&summary)?,
        OutputFormat::Text if !cli.quiet => display_completion_summary(&summary),
        OutputFormat::Text => {}
    }

    Ok(())
}
