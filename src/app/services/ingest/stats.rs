//! Upload summary statistics

use serde::Serialize;

/// Counters reported after a successful ingest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Number of interval data (300) records consumed
    pub interval_records: u64,

    /// Number of normalized rows handed to the sink
    pub readings_written: u64,

    /// Number of distinct meter identifiers seen across the upload
    pub distinct_nmis: usize,
}
