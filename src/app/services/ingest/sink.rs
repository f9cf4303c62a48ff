//! Persistence sinks for normalized meter readings
//!
//! A sink stages rows during an upload and makes them visible only on
//! commit. [`CsvSink`] writes rows to a temporary file and atomically
//! persists it; [`MemorySink`] keeps committed rows in memory and enforces
//! the same (nmi, timestamp) uniqueness a relational store would.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::app::models::MeterReading;

/// Errors originating in the persistence layer. These are deliberately
/// distinct from parse errors so callers can tell "your file is malformed"
/// apart from "this data was already ingested".
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("duplicate reading for NMI {nmi} at {timestamp}")]
    DuplicateReading {
        nmi: String,
        timestamp: NaiveDateTime,
    },

    #[error("failed to write reading: {0}")]
    Write(#[from] csv::Error),

    #[error("I/O error in reading sink: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for normalized consumption rows.
///
/// Rows passed to `insert` are staged; `commit` makes the staged rows of the
/// current upload durable, `rollback` discards them. A sink must leave no
/// trace of an upload that was rolled back.
pub trait ReadingSink {
    fn insert(&mut self, reading: &MeterReading) -> Result<(), StorageError>;
    fn commit(&mut self) -> Result<(), StorageError>;
    fn rollback(&mut self) -> Result<(), StorageError>;
}

/// Sink writing `nmi,timestamp,consumption` CSV rows.
///
/// Rows are staged in a temporary file next to the output path; the output
/// file appears only on commit, so a failed upload leaves nothing behind.
pub struct CsvSink {
    writer: Option<csv::Writer<NamedTempFile>>,
    output_path: PathBuf,
}

impl CsvSink {
    pub fn create(output_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let output_path = output_path.into();
        let staging_dir = output_path.parent().unwrap_or_else(|| Path::new("."));
        let staging = NamedTempFile::new_in(staging_dir)?;
        debug!("staging CSV rows in {}", staging.path().display());
        let writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(staging);
        Ok(Self {
            writer: Some(writer),
            output_path,
        })
    }
}

impl ReadingSink for CsvSink {
    fn insert(&mut self, reading: &MeterReading) -> Result<(), StorageError> {
        if let Some(writer) = self.writer.as_mut() {
            writer.serialize(reading)?;
        }
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StorageError> {
        let Some(writer) = self.writer.take() else {
            return Ok(());
        };
        let staging = writer
            .into_inner()
            .map_err(|e| StorageError::Io(e.into_error()))?;
        staging
            .persist(&self.output_path)
            .map_err(|e| StorageError::Io(e.error))?;
        info!("wrote normalized readings to {}", self.output_path.display());
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), StorageError> {
        // Dropping the writer drops the temp file with the staged rows.
        self.writer = None;
        Ok(())
    }
}

/// In-memory sink with a (nmi, start_time) uniqueness constraint, mirroring
/// the unique index the relational store enforces.
#[derive(Debug, Default)]
pub struct MemorySink {
    staged: HashMap<(String, NaiveDateTime), f64>,
    committed: HashMap<(String, NaiveDateTime), f64>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed rows visible in the store.
    pub fn committed_rows(&self) -> usize {
        self.committed.len()
    }

    /// Committed consumption for a meter at an interval start time.
    pub fn consumption_for(&self, nmi: &str, start_time: NaiveDateTime) -> Option<f64> {
        self.committed.get(&(nmi.to_string(), start_time)).copied()
    }
}

impl ReadingSink for MemorySink {
    fn insert(&mut self, reading: &MeterReading) -> Result<(), StorageError> {
        let key = (reading.nmi.clone(), reading.start_time);
        if self.committed.contains_key(&key) || self.staged.contains_key(&key) {
            return Err(StorageError::DuplicateReading {
                nmi: reading.nmi.clone(),
                timestamp: reading.start_time,
            });
        }
        self.staged.insert(key, reading.consumption_kwh);
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StorageError> {
        self.committed.extend(self.staged.drain());
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), StorageError> {
        self.staged.clear();
        Ok(())
    }
}
