//! Streaming parser for the AEMO NEM12 interval metering format
//!
//! NEM12 is a line-oriented, comma-delimited text format: each line carries a
//! three-digit record indicator (100/200/300/400/500/900) that determines how
//! the rest of the line is interpreted, and the specification fixes which
//! indicators may legally follow which. This module reproduces those rules as
//! a pull-driven state machine that yields one typed record per input line,
//! or a single line-numbered error.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - The record-ordering state machine and lazy record iterator
//! - [`records`] - The closed record sum type and per-variant deserializers
//! - [`field_formats`] - Primitives for the format's fixed-width field types
//! - [`units`] - The closed unit-of-measure table and kWh conversion
//! - [`error`] - Structural and field-format errors plus the line wrapper
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use nem12_processor::app::services::nem12_parser::{Nem12Parser, Record};
//!
//! # fn example() -> Result<(), nem12_processor::app::services::nem12_parser::ParseError> {
//! let input = Cursor::new("100,NEM12,200506081149,MDA1,Ret1\n...");
//! for record in Nem12Parser::new(input) {
//!     match record? {
//!         Record::IntervalData(data) => println!("{} samples", data.interval_values.len()),
//!         _ => {}
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod field_formats;
pub mod parser;
pub mod records;
pub mod units;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use error::{FieldFormatError, LineError, ParseError, StructuralError};
pub use parser::Nem12Parser;
pub use records::{
    B2BDetails, DataDetails, EndOfData, Header, IntervalData, IntervalEvent, IntervalValue,
    Record, RecordIndicator,
};
pub use units::{UnitOfMeasure, UnsupportedConversion};
