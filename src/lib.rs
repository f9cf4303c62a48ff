//! NEM12 Processor Library
//!
//! A Rust library for parsing AEMO NEM12 interval meter data files and
//! normalizing their consumption readings for bulk storage.
//!
//! This library provides tools for:
//! - Streaming, pull-driven NEM12 parsing with strict record-ordering rules
//! - Line-numbered parse diagnostics for malformed uploads
//! - A closed unit-of-measure table with kilowatt hour normalization
//! - All-or-nothing ingestion of interval readings into pluggable sinks
//! - A CLI for converting NEM12 files into flat consumption rows

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod ingest;
        pub mod nem12_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::MeterReading;
pub use app::services::ingest::{IngestStats, Ingestor, ReadingSink};
pub use app::services::nem12_parser::{Nem12Parser, ParseError, Record};
pub use config::Config;
pub use error::{Error, Result};
