//! Conversion engine.
//!
//! The engine works on explicit paths. Directory scanning is a thin wrapper
//! ([`Converter::convert_directory`]) over [`Converter::convert_files`], and
//! all console output is left to the progress callback.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::api::results::{ConversionReport, ProgressEvent, RunSummary};
use crate::core::config::ConverterConfig;
use crate::core::errors::Result;
use crate::core::file_utils::{FileReader, InputDiscovery};
use crate::core::schema::{infer_schema, split_lines, RelationSchema};
use crate::io::arff_writer::{remove_stale_output, ChunkedLineWriter};

/// Schema-inferring CSV to ARFF converter
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Create a converter with a validated configuration
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Infer the schema of in-memory text without touching the filesystem
    pub fn infer(&self, content: &str) -> RelationSchema {
        infer_schema(&self.config, split_lines(content))
    }

    /// Render a complete ARFF document for in-memory text
    pub fn render(&self, content: &str) -> String {
        let schema = self.infer(content);
        let mut document = String::with_capacity(content.len() + 64);
        let header = schema.header_lines();
        for line in header.iter().map(String::as_str).chain(split_lines(content)) {
            document.push_str(line);
            document.push('\n');
        }
        document
    }

    /// Convert one input file into its sibling output file.
    ///
    /// The whole input is read before anything is written. Any previous output
    /// of the same name is deleted first.
    pub fn convert_file(&self, input: &Path) -> Result<ConversionReport> {
        let output = InputDiscovery::derive_output_path(input, &self.config)?;
        self.convert_file_to(input, &output)
    }

    fn convert_file_to(&self, input: &Path, output: &Path) -> Result<ConversionReport> {
        let content = FileReader::read_to_string(input)?;
        let schema = self.infer(&content);
        debug!(
            "Inferred {} attributes ({} categorical) from {} rows of {}",
            schema.column_count(),
            schema.categorical_count(),
            schema.row_count(),
            input.display()
        );

        remove_stale_output(output)?;

        let mut writer = ChunkedLineWriter::new(output, self.config.flush_threshold);
        debug!("Writing {}", writer.path().display());
        writer.push_lines(schema.header_lines().iter().map(String::as_str))?;
        writer.push_lines(split_lines(&content))?;
        let stats = writer.finish()?;

        Ok(ConversionReport::new(
            input.to_path_buf(),
            output.to_path_buf(),
            &schema,
            stats.flushes,
        ))
    }

    /// Convert each input in order, reporting progress through `on_progress`.
    /// The first failure aborts the run.
    pub fn convert_files<F>(&self, inputs: &[PathBuf], mut on_progress: F) -> Result<RunSummary>
    where
        F: FnMut(&ProgressEvent),
    {
        let mut summary = RunSummary::default();
        for input in inputs {
            let output = InputDiscovery::derive_output_path(input, &self.config)?;
            on_progress(&ProgressEvent::Converting {
                input: input.clone(),
                output: output.clone(),
            });

            let report = self.convert_file_to(input, &output)?;
            on_progress(&ProgressEvent::Converted(report.clone()));
            summary.reports.push(report);
        }
        Ok(summary)
    }

    /// Discover candidate inputs in `dir` and convert them all
    pub fn convert_directory<F>(&self, dir: &Path, mut on_progress: F) -> Result<RunSummary>
    where
        F: FnMut(&ProgressEvent),
    {
        info!("Scanning {} for input files", dir.display());
        let inputs = InputDiscovery::discover_inputs(dir, &self.config)?;
        on_progress(&ProgressEvent::Discovered(inputs.clone()));

        let summary = self.convert_files(&inputs, on_progress)?;
        info!(
            "Converted {} files ({} data rows)",
            summary.files_converted(),
            summary.total_rows()
        );
        Ok(summary)
    }
}
