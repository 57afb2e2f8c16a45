//! CLI Argument Structures
//!
//! Running with no arguments converts every `.csv` file in the current
//! directory, which is the whole everyday use of the tool.

use clap::{Parser, ValueEnum};
use arff_sniff::VERSION;
use std::path::PathBuf;

/// Convert CSV files into ARFF with inferred attribute types
#[derive(Parser, Debug)]
#[command(name = "csv2arff")]
#[command(version = VERSION)]
#[command(about = "Convert CSV files into ARFF with inferred NUMERIC / nominal attributes")]
#[command(long_about = "
Scans a directory for files whose name contains '.csv' and writes an ARFF file
next to each one. Columns are NUMERIC unless a non-numeric, non-missing value
appears, in which case they become nominal with every such value listed in
first-seen order. '?' and empty fields count as missing.

The output name keeps everything before the first '.' of the input name:
'weather.2024.csv' becomes 'weather.arff'. Existing outputs are replaced.

Common Usage:

  # Convert everything in the current directory
  csv2arff

  # Convert a different directory
  csv2arff ./datasets

  # Machine-readable summary
  csv2arff --format json
")]
pub struct Cli {
    /// Directory to scan for input files
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// How progress and results are printed
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Console output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable progress lines
    Text,
    /// A single JSON summary printed after the run
    Json,
}
