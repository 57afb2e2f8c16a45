//! # arff-sniff: schema-inferring CSV to ARFF conversion
//!
//! Converts comma-separated files into the ARFF attribute-relation format.
//! Each column is sniffed in a single pass: it stays `NUMERIC` until a value
//! that is neither missing (`?` or empty) nor a float shows up, at which point
//! it becomes a nominal attribute listing every such value in first-seen order.
//! The data section is the input text, line for line.
//!
//! ```text
//! @Relation FVS
//! @attribute ATT_0	NUMERIC
//! @attribute ATT_1	{red,blue}
//! @data
//! 1,red
//! 2,blue
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use arff_sniff::Converter;
//!
//! let converter = Converter::default();
//! let schema = converter.infer("1,2,red\n3,4,blue\n5,?,red\n");
//!
//! assert_eq!(schema.column_count(), 3);
//! assert_eq!(schema.header_lines()[3], "@attribute ATT_2\t{red,blue}");
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core inference and supporting types
pub mod core {
    //! Schema inference, configuration, errors and file helpers.

    pub mod config;
    pub mod errors;
    pub mod file_utils;
    pub mod schema;
}

// Output writing
pub mod io {
    //! ARFF output writing.

    pub mod arff_writer;
}

// Public API and engine interface
pub mod api {
    //! High-level conversion engine and its results.

    pub mod engine;
    pub mod results;
}

// Re-export primary types for convenience
pub use crate::api::engine::Converter;
pub use crate::api::results::{ConversionReport, ProgressEvent, RunSummary};
pub use crate::core::config::ConverterConfig;
pub use crate::core::errors::{ConvertError, Result, ResultExt};
pub use crate::core::schema::{ColumnType, RelationSchema};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
