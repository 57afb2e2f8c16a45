//! Console display of progress events and run summaries.

use std::path::Path;

use arff_sniff::{ConversionReport, ProgressEvent, RunSummary};
use owo_colors::OwoColorize;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Print one progress event
pub fn display_progress(event: &ProgressEvent) {
    match event {
        ProgressEvent::Discovered(inputs) => {
            if inputs.is_empty() {
                println!("{}", "No input files found".yellow());
                return;
            }
            println!(
                "{} {}",
                "📂 Input files:".bright_blue().bold(),
                inputs.len().to_string().cyan()
            );
            for input in inputs {
                println!("  {}", file_name(input));
            }
            println!();
        }
        ProgressEvent::Converting { input, output } => {
            println!(
                "{} {} {}",
                file_name(input).green(),
                "→".dimmed(),
                file_name(output).cyan()
            );
        }
        ProgressEvent::Converted(report) => display_report(report),
    }
}

fn display_report(report: &ConversionReport) {
    println!(
        "  {} rows, {} attributes ({} numeric, {} nominal)",
        report.rows,
        report.columns,
        report.numeric_columns,
        report.categorical_columns
    );
}

/// Print the closing line of a text-mode run
pub fn display_completion_summary(summary: &RunSummary) {
    if summary.is_empty() {
        return;
    }
    println!();
    println!(
        "{} {} files, {} data rows",
        "✅ Converted".green().bold(),
        summary.files_converted(),
        summary.total_rows()
    );
}

/// Print the run summary as pretty JSON
pub fn print_json_summary(summary: &RunSummary) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
