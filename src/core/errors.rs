//! Error types for the arff-sniff library.
//!
//! Conversion is a one-shot batch job, so the error surface is small: I/O
//! failures carry the path-level message they happened under, configuration
//! errors name the offending field, and everything else is internal.

use std::io;

use thiserror::Error;

/// Main result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error type for all conversion operations.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// I/O related errors (directory listing, reading inputs, writing outputs)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
        /// Additional context
        context: Option<String>,
    },
}

impl ConvertError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            context: None,
        }
    }

    /// Add context to an existing error.
    ///
    /// I/O messages get the context prepended; internal errors store it
    /// separately. Configuration errors already name their field and are
    /// returned unchanged.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        match &mut self {
            Self::Io { message, .. } => {
                *message = format!("{}: {message}", context.into());
            }
            Self::Internal { context: ctx, .. } => {
                *ctx = Some(context.into());
            }
            Self::Config { .. } => {}
        }
        self
    }
}

impl From<io::Error> for ConvertError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ConvertError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ConvertError::config_field("Invalid configuration", "delimiter");
        assert!(matches!(err, ConvertError::Config { .. }));

        let err = ConvertError::internal("Something went wrong");
        assert!(matches!(err, ConvertError::Internal { .. }));
    }

    #[test]
    fn test_io_error_creation() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let err = ConvertError::io("Failed to write data.arff", io_err);

        if let ConvertError::Io { message, source } = &err {
            assert_eq!(message, "Failed to write data.arff");
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        } else {
            panic!("Expected Io error");
        }
    }

    #[test]
    fn test_config_field_error() {
        let err = ConvertError::config_field("must be positive", "flush_threshold");

        if let ConvertError::Config { message, field } = err {
            assert_eq!(message, "must be positive");
            assert_eq!(field, Some("flush_threshold".to_string()));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_io_context_is_prepended() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));

        let err = result
            .with_context(|| "Failed to read weather.csv".to_string())
            .unwrap_err();

        if let ConvertError::Io { message, source } = err {
            assert_eq!(message, "Failed to read weather.csv: I/O operation failed");
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        } else {
            panic!("Expected Io error");
        }
    }

    #[test]
    fn test_internal_context_is_stored() {
        let err = ConvertError::internal("unexpected state").with_context("rendering header");

        if let ConvertError::Internal { context, .. } = err {
            assert_eq!(context, Some("rendering header".to_string()));
        } else {
            panic!("Expected Internal error");
        }
    }

    #[test]
    fn test_with_context_config_unchanged() {
        let err = ConvertError::config_field("Bad config", "relation_name")
            .with_context("Should not change");

        if let ConvertError::Config { message, field } = err {
            assert_eq!(message, "Bad config");
            assert_eq!(field, Some("relation_name".to_string()));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_error_display_formatting() {
        let err = ConvertError::config_field("relation name is empty", "relation_name");
        assert_eq!(
            err.to_string(),
            "Configuration error: relation name is empty"
        );

        let debug = format!("{err:?}");
        assert!(debug.contains("relation_name"));
    }
}
