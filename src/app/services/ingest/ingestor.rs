//! Record-stream ingestion: NEM12 records to normalized kilowatt hour rows

use std::collections::HashSet;
use std::io::BufRead;

use tracing::{debug, info, warn};

use crate::app::models::MeterReading;
use crate::app::services::nem12_parser::{DataDetails, Nem12Parser, Record};
use crate::error::Result;

use super::sink::ReadingSink;
use super::stats::IngestStats;

/// Consumes a NEM12 record stream and writes one normalized row per interval
/// sample to the configured sink.
///
/// The ingestor remembers the last seen data details record as the context
/// for subsequent interval data, converts each sample to kilowatt hours with
/// the context's unit of measure, and commits the sink only when the whole
/// stream parsed cleanly. Any error rolls the sink back, so an upload is
/// all-or-nothing.
pub struct Ingestor<S> {
    sink: S,
}

impl<S: ReadingSink> Ingestor<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Ingest one NEM12 upload from `input`.
    pub fn ingest<R: BufRead>(&mut self, input: R) -> Result<IngestStats> {
        match self.consume_stream(input) {
            Ok(stats) => {
                self.sink.commit()?;
                info!(
                    "ingested {} interval records: {} rows across {} NMIs",
                    stats.interval_records, stats.readings_written, stats.distinct_nmis
                );
                Ok(stats)
            }
            Err(error) => {
                if let Err(rollback_error) = self.sink.rollback() {
                    warn!("sink rollback failed: {rollback_error}");
                }
                Err(error)
            }
        }
    }

    /// Consume the sink, returning it for inspection of committed rows.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn consume_stream<R: BufRead>(&mut self, input: R) -> Result<IngestStats> {
        let mut stats = IngestStats::default();
        let mut nmis: HashSet<String> = HashSet::new();
        let mut current_details: Option<DataDetails> = None;

        for record in Nem12Parser::new(input) {
            match record? {
                Record::Header(header) => {
                    debug!(
                        "NEM12 file created {} ({} -> {})",
                        header.created, header.from_participant, header.to_participant
                    );
                }

                Record::DataDetails(details) => {
                    current_details = Some(details);
                }

                Record::IntervalData(data) => {
                    let details = current_details
                        .as_ref()
                        .expect("parser guarantees a data details record precedes interval data");
                    stats.interval_records += 1;
                    nmis.insert(details.nmi.clone());

                    for value in &data.interval_values {
                        let consumption_kwh = details
                            .unit_of_measure
                            .to_kilowatt_hours(value.quantity)?;
                        self.sink.insert(&MeterReading::new(
                            details.nmi.clone(),
                            value.start_time,
                            consumption_kwh,
                        ))?;
                        stats.readings_written += 1;
                    }
                }

                // Recognized but payload-opaque; nothing to persist.
                Record::IntervalEvent(_) | Record::B2BDetails(_) => {}

                Record::EndOfData(_) => {}
            }
        }

        stats.distinct_nmis = nmis.len();
        Ok(stats)
    }
}
