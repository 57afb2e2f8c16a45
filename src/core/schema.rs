//! Single-pass column type inference and ARFF header rendering.
//!
//! Every column starts out [`ColumnType::Numeric`]. The first field that is
//! neither missing nor parseable as a float turns the column
//! [`ColumnType::Categorical`], and from then on every such field is recorded
//! in first-seen order. The transition is one-way.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

use crate::core::config::ConverterConfig;

/// ARFF type token for numeric attributes.
pub const NUMERIC_TOKEN: &str = "NUMERIC";

/// Marker line that opens the data section.
pub const DATA_MARKER: &str = "@data";

/// What a single raw field says about its column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// Sentinel token or empty field, carries no information
    Missing,
    /// Parses as a floating-point number
    Numeric,
    /// Anything else; forces the column categorical
    Nominal,
}

/// Split text into lines, treating `\r\n`, `\n` and a lone `\r` as
/// terminators. A terminator at the very end does not produce an empty line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let line = &rest[..end];
                let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Classify one raw field.
///
/// The missing check is on the raw text. The numeric check ignores
/// surrounding whitespace, so `" 3.5"` is numeric.
pub fn classify_field(field: &str, missing_token: &str) -> FieldClass {
    if field.is_empty() || field == missing_token {
        FieldClass::Missing
    } else if parses_as_float(field.trim()) {
        FieldClass::Numeric
    } else {
        FieldClass::Nominal
    }
}

/// Float syntax plus digit grouping: `1_000` is accepted when every `_`
/// sits between two ASCII digits.
fn parses_as_float(text: &str) -> bool {
    if !text.contains('_') {
        return text.parse::<f64>().is_ok();
    }
    let bytes = text.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    grouped && text.replace('_', "").parse::<f64>().is_ok()
}

/// Inferred type of one column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum ColumnType {
    /// No nominal value has been seen in this position
    #[default]
    Numeric,
    /// Distinct nominal values in first-seen order
    Categorical(IndexSet<String>),
}

impl ColumnType {
    /// Record a nominal value, switching the column to categorical if needed.
    fn absorb(&mut self, value: &str) {
        match self {
            Self::Numeric => {
                let mut values = IndexSet::new();
                values.insert(value.to_string());
                *self = Self::Categorical(values);
            }
            Self::Categorical(values) => {
                if !values.contains(value) {
                    values.insert(value.to_string());
                }
            }
        }
    }

    /// Whether the column is still numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric)
    }

    /// Category labels, if the column is categorical
    pub fn categories(&self) -> Option<&IndexSet<String>> {
        match self {
            Self::Numeric => None,
            Self::Categorical(values) => Some(values),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => f.write_str(NUMERIC_TOKEN),
            Self::Categorical(values) => {
                f.write_str("{")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(value)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Accumulates column state across the rows of one file
#[derive(Debug)]
pub struct SchemaBuilder<'a> {
    config: &'a ConverterConfig,
    columns: Vec<ColumnType>,
    last_arity: usize,
    rows: usize,
}

impl<'a> SchemaBuilder<'a> {
    /// Start an empty schema
    pub fn new(config: &'a ConverterConfig) -> Self {
        Self {
            config,
            columns: Vec::new(),
            last_arity: 0,
            rows: 0,
        }
    }

    /// Scan one line. The line must already have its terminator removed.
    pub fn observe_line(&mut self, line: &str) {
        let mut arity = 0;
        for (index, field) in line.split(self.config.delimiter).enumerate() {
            arity = index + 1;
            if classify_field(field, &self.config.missing_token) != FieldClass::Nominal {
                continue;
            }
            if self.columns.len() <= index {
                self.columns.resize(index + 1, ColumnType::Numeric);
            }
            self.columns[index].absorb(field);
        }
        self.last_arity = arity;
        self.rows += 1;
    }

    /// Finalize. The declared width is the arity of the last line observed.
    pub fn finish(self) -> RelationSchema {
        let mut columns = self.columns;
        columns.resize(self.last_arity, ColumnType::Numeric);
        RelationSchema {
            name: self.config.relation_name.clone(),
            columns,
            rows: self.rows,
        }
    }
}

/// Infer a schema from an iterator of lines
pub fn infer_schema<'l, I>(config: &ConverterConfig, lines: I) -> RelationSchema
where
    I: IntoIterator<Item = &'l str>,
{
    let mut builder = SchemaBuilder::new(config);
    for line in lines {
        builder.observe_line(line);
    }
    builder.finish()
}

/// Finalized relation description for one input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationSchema {
    name: String,
    columns: Vec<ColumnType>,
    rows: usize,
}

impl RelationSchema {
    /// Relation name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column types, indexed by position
    pub fn columns(&self) -> &[ColumnType] {
        &self.columns
    }

    /// Declared number of attributes
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of lines scanned
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of numeric attributes
    pub fn numeric_count(&self) -> usize {
        self.columns.iter().filter(|c| c.is_numeric()).count()
    }

    /// Number of categorical attributes
    pub fn categorical_count(&self) -> usize {
        self.column_count() - self.numeric_count()
    }

    /// Positional attribute name
    pub fn attribute_name(index: usize) -> String {
        format!("ATT_{index}")
    }

    /// Relation line, one attribute line per column, then the data marker
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.columns.len() + 2);
        lines.push(format!("@Relation {}", self.name));
        for (index, column) in self.columns.iter().enumerate() {
            lines.push(format!(
                "@attribute {}\t{}",
                Self::attribute_name(index),
                column
            ));
        }
        lines.push(DATA_MARKER.to_string());
        lines
    }
}
