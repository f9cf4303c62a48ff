//! Crate-level error handling for NEM12 processing operations.
//!
//! The parser and the sinks each declare their own error types; this module
//! provides the single error surface the ingestion layer and CLI work with,
//! keeping "your file is malformed" distinguishable from "this data was
//! already ingested".

use thiserror::Error;

use crate::app::services::ingest::sink::StorageError;
use crate::app::services::nem12_parser::error::ParseError;
use crate::app::services::nem12_parser::units::UnsupportedConversion;

/// Result type alias for the NEM12 processor
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The upload is malformed; carries the offending line number
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The persistence sink rejected or failed to stage a reading
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Interval quantities cannot be normalized to kilowatt hours
    #[error("cannot normalize consumption: {0}")]
    UnsupportedUnit(#[from] UnsupportedConversion),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the failure came from the persistence layer rather than the
    /// uploaded file itself.
    pub fn is_storage_conflict(&self) -> bool {
        matches!(
            self,
            Self::Storage(StorageError::DuplicateReading { .. })
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
