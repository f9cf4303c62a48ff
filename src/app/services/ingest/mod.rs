//! Ingestion of parsed NEM12 records into persistence sinks
//!
//! This is the consumer side of the parser's record stream: it remembers the
//! current data details context, converts every interval sample to kilowatt
//! hours and emits one flat (nmi, timestamp, consumption) row per sample.
//! Uploads are all-or-nothing; a parse or storage failure rolls back
//! everything staged for the upload.
//!
//! Components:
//! - [`ingestor`] - Stream consumption and unit normalization
//! - [`sink`] - The `ReadingSink` trait plus CSV and in-memory sinks
//! - [`stats`] - Upload summary counters

pub mod ingestor;
pub mod sink;
pub mod stats;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use ingestor::Ingestor;
pub use sink::{CsvSink, MemorySink, ReadingSink, StorageError};
pub use stats::IngestStats;
