//! Error types for NEM12 parsing
//!
//! Validation failures come in two kinds: structural violations of the file
//! grammar and value-level failures on individual fields. Both are caught at
//! line granularity and re-raised as a single [`ParseError`] carrying the
//! 1-based line number, which is the only error type the parser exposes.

use thiserror::Error;

/// Violations of the file structure: record ordering, field counts, the
/// header version token, terminator handling and unit-of-measure lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("incorrect field count for {record} record: {found}")]
    FieldCount { record: &'static str, found: usize },

    #[error("incorrect field count for interval data record")]
    IntervalFieldCount,

    #[error("unsupported header version: {version}")]
    UnsupportedHeaderVersion { version: String },

    #[error("unresolvable unit of measure: {token}")]
    UnresolvableUnitOfMeasure { token: String },

    #[error("unexpected record indicator: {indicator} after {previous}")]
    UnexpectedRecordIndicator { indicator: String, previous: String },

    #[error("dates must be presented in date sequential order")]
    DatesOutOfOrder,

    #[error("missing end of data record")]
    MissingEndOfData,
}

/// Value-level failures on individual fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldFormatError {
    #[error("'{value}' is not a valid Date(8) calendar date")]
    InvalidDate { value: String },

    #[error("'{value}' is not a valid DateTime(12) value")]
    InvalidDateTime { value: String },

    #[error("'{value}' exceeds the maximum length of {max_length} characters")]
    ExceedsMaxLength { value: String, max_length: usize },

    #[error("'{value}' does not match the expected length of {length} characters")]
    LengthMismatch { value: String, length: usize },

    #[error("'{value}' is not a valid numeric value")]
    NotNumeric { value: String },

    #[error("interval value {index} ('{value}') is not a valid numeric value")]
    InvalidIntervalValue { index: usize, value: String },

    #[error("interval length is {found} but must be one of 5, 15 or 30")]
    InvalidIntervalLength { found: u32 },
}

/// Any failure raised while processing a single input line.
#[derive(Error, Debug)]
pub enum LineError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    FieldFormat(#[from] FieldFormatError),

    #[error("I/O error while reading input")]
    Io(#[from] std::io::Error),
}

/// The only error the parser surfaces to callers: the failing 1-based line
/// number plus the underlying reason.
#[derive(Error, Debug)]
#[error("parse error on line {line}: {source}")]
pub struct ParseError {
    pub line: u64,
    #[source]
    pub source: LineError,
}

impl ParseError {
    pub(crate) fn at(line: u64, source: impl Into<LineError>) -> Self {
        Self {
            line,
            source: source.into(),
        }
    }
}
