//! Conversion constants.
//!
//! There is no configuration file or environment surface: the converter
//! always runs with [`ConverterConfig::default`]. Keeping the constants in one
//! struct lets tests shrink the flush threshold or swap the sentinel without
//! touching the inference code.

use serde::{Deserialize, Serialize};

use crate::core::errors::{ConvertError, Result};

/// Relation name written on the `@Relation` line.
pub const DEFAULT_RELATION_NAME: &str = "FVS";

/// Token that marks a missing value in the input.
pub const DEFAULT_MISSING_TOKEN: &str = "?";

/// Substring a file name must contain to be picked up as an input.
pub const DEFAULT_INPUT_MARKER: &str = ".csv";

/// Extension given to generated files.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "arff";

/// Buffered line count above which the writer appends to disk.
pub const DEFAULT_FLUSH_THRESHOLD: usize = 10_000;

/// Settings for a conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Field delimiter used to split each input line
    pub delimiter: char,

    /// Literal token treated as a missing value (empty fields are always missing)
    pub missing_token: String,

    /// Substring that selects input files during discovery
    pub input_marker: String,

    /// Extension appended to the derived output name, without the dot
    pub output_extension: String,

    /// Name declared on the relation line of every header
    pub relation_name: String,

    /// Buffered line count that triggers a flush once exceeded
    pub flush_threshold: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            missing_token: DEFAULT_MISSING_TOKEN.to_string(),
            input_marker: DEFAULT_INPUT_MARKER.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            relation_name: DEFAULT_RELATION_NAME.to_string(),
            flush_threshold: DEFAULT_FLUSH_THRESHOLD,
        }
    }
}

impl ConverterConfig {
    /// Override the flush threshold
    pub fn with_flush_threshold(mut self, threshold: usize) -> Self {
        self.flush_threshold = threshold;
        self
    }

    /// Override the missing-value token
    pub fn with_missing_token(mut self, token: impl Into<String>) -> Self {
        self.missing_token = token.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.flush_threshold == 0 {
            return Err(ConvertError::config_field(
                "flush_threshold must be greater than 0",
                "flush_threshold",
            ));
        }

        if self.input_marker.is_empty() {
            return Err(ConvertError::config_field(
                "input_marker cannot be empty",
                "input_marker",
            ));
        }

        if self.output_extension.is_empty() || self.output_extension.contains('.') {
            return Err(ConvertError::config_field(
                format!(
                    "output_extension must be a non-empty name without dots, got '{}'",
                    self.output_extension
                ),
                "output_extension",
            ));
        }

        if self.relation_name.trim().is_empty() {
            return Err(ConvertError::config_field(
                "relation_name cannot be empty",
                "relation_name",
            ));
        }

        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(ConvertError::config_field(
                "delimiter cannot be a line terminator",
                "delimiter",
            ));
        }

        Ok(())
    }
}
