//! Result and progress types returned by the conversion engine.

use std::path::PathBuf;

use serde::Serialize;

use crate::core::schema::RelationSchema;

/// Outcome of converting one input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Input file
    pub input: PathBuf,
    /// Generated file
    pub output: PathBuf,
    /// Data lines copied into the output
    pub rows: usize,
    /// Declared attributes
    pub columns: usize,
    /// Attributes declared NUMERIC
    pub numeric_columns: usize,
    /// Attributes declared as a category set
    pub categorical_columns: usize,
    /// Append operations used to write the output
    pub flushes: usize,
}

impl ConversionReport {
    pub(crate) fn new(
        input: PathBuf,
        output: PathBuf,
        schema: &RelationSchema,
        flushes: usize,
    ) -> Self {
        Self {
            input,
            output,
            rows: schema.row_count(),
            columns: schema.column_count(),
            numeric_columns: schema.numeric_count(),
            categorical_columns: schema.categorical_count(),
            flushes,
        }
    }
}

/// Reports for every file converted in one run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Per-file reports
    pub reports: Vec<ConversionReport>,
}

impl RunSummary {
    /// Number of files converted
    pub fn files_converted(&self) -> usize {
        self.reports.len()
    }

    /// Data lines written across all files
    pub fn total_rows(&self) -> usize {
        self.reports.iter().map(|r| r.rows).sum()
    }

    /// Whether nothing was converted
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Progress notifications handed to the caller's callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Candidate inputs found in the scanned directory
    Discovered(Vec<PathBuf>),
    /// About to convert `input` into `output`
    Converting {
        /// Input file
        input: PathBuf,
        /// Output file
        output: PathBuf,
    },
    /// Finished one file
    Converted(ConversionReport),
}
