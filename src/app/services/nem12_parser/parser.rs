//! The NEM12 record-ordering state machine and lazy record iterator
//!
//! The parser wraps a buffered reader and yields one validated [`Record`]
//! per input line. It is pull-driven: each `next` call reads exactly one
//! line, so memory stays bounded regardless of file size and no record is
//! produced faster than the consumer drains it. A parse is single-pass and
//! not rewindable; to reparse, construct a fresh parser over fresh input.

use std::io::BufRead;

use chrono::NaiveDate;
use tracing::debug;

use super::error::{LineError, ParseError, StructuralError};
use super::records::{
    B2BDetails, DataDetails, EndOfData, Header, IntervalData, IntervalEvent, Record,
    RecordIndicator,
};

/// Record indicators legal to appear after the given one (specification 4.1).
/// `None` is the start of the file; nothing may follow the terminator.
fn allowed_after(previous: Option<RecordIndicator>) -> &'static [RecordIndicator] {
    use RecordIndicator::*;
    match previous {
        None => &[Header],
        Some(Header) => &[DataDetails],
        Some(DataDetails) => &[IntervalData],
        Some(IntervalData) => &[DataDetails, IntervalData, IntervalEvent, B2BDetails, EndOfData],
        Some(IntervalEvent) => &[DataDetails, IntervalData, IntervalEvent, B2BDetails, EndOfData],
        Some(B2BDetails) => &[DataDetails, IntervalData, B2BDetails, EndOfData],
        Some(EndOfData) => &[],
    }
}

/// Mutable parse state, local to one parse invocation.
#[derive(Debug)]
struct ParserState {
    /// Indicator of the previously accepted record, `None` at start
    previous: Option<RecordIndicator>,
    /// The data details context owning subsequent 300 records
    current_details: Option<DataDetails>,
    /// Date of the previous 300 record, reset on every new details block
    previous_date: Option<NaiveDate>,
    /// 1-based number of the line currently being processed
    line: u64,
    finished: bool,
}

/// Streaming NEM12 parser.
///
/// Implements `Iterator<Item = Result<Record, ParseError>>`. After yielding
/// an error the iterator is fused: no further lines are read.
pub struct Nem12Parser<R> {
    reader: R,
    state: ParserState,
}

impl<R: BufRead> Nem12Parser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            state: ParserState {
                previous: None,
                current_details: None,
                previous_date: None,
                line: 1,
                finished: false,
            },
        }
    }

    fn next_record(&mut self) -> Result<Option<Record>, ParseError> {
        let mut buf = String::new();
        let bytes_read = self
            .reader
            .read_line(&mut buf)
            .map_err(|e| ParseError::at(self.state.line, LineError::from(e)))?;

        if bytes_read == 0 {
            self.state.finished = true;
            if self.state.previous != Some(RecordIndicator::EndOfData) {
                return Err(ParseError::at(
                    self.state.line,
                    StructuralError::MissingEndOfData,
                ));
            }
            return Ok(None);
        }

        let line = buf.trim_end_matches(['\r', '\n']);
        let record = self
            .parse_line(line)
            .map_err(|e| ParseError::at(self.state.line, e))?;
        self.state.line += 1;
        Ok(Some(record))
    }

    fn parse_line(&mut self, line: &str) -> Result<Record, LineError> {
        // [3.3.1.d] Commas are not permitted in any data field, so the whole
        // line can be split unconditionally.
        let fields: Vec<&str> = line.split(',').collect();
        let token = fields[0];

        let allowed = allowed_after(self.state.previous);
        let indicator = RecordIndicator::from_code(token)
            .filter(|candidate| allowed.contains(candidate))
            .ok_or_else(|| StructuralError::UnexpectedRecordIndicator {
                indicator: token.to_string(),
                previous: self
                    .state
                    .previous
                    .map(|p| p.code().to_string())
                    .unwrap_or_else(|| "start".to_string()),
            })?;

        let record = match indicator {
            RecordIndicator::Header => Record::Header(Header::deserialize(&fields)?),

            RecordIndicator::DataDetails => {
                let details = DataDetails::deserialize(&fields)?;
                debug!(
                    "data details block: NMI {} ({} minute intervals, {})",
                    details.nmi, details.interval_length, details.unit_of_measure
                );
                // Date ordering of 300 records is tracked per details block.
                self.state.previous_date = None;
                self.state.current_details = Some(details.clone());
                Record::DataDetails(details)
            }

            RecordIndicator::IntervalData => {
                let details = self
                    .state
                    .current_details
                    .as_ref()
                    .expect("transition table guarantees a 200 record precedes any 300 record");
                let data = IntervalData::deserialize(&fields, details)?;

                // 300 records must be presented in date sequential order.
                if let Some(previous_date) = self.state.previous_date {
                    if data.interval_date <= previous_date {
                        return Err(StructuralError::DatesOutOfOrder.into());
                    }
                }
                self.state.previous_date = Some(data.interval_date);
                Record::IntervalData(data)
            }

            RecordIndicator::IntervalEvent => {
                Record::IntervalEvent(IntervalEvent::deserialize(&fields)?)
            }

            RecordIndicator::B2BDetails => Record::B2BDetails(B2BDetails::deserialize(&fields)?),

            // Iteration does not stop at the terminator: any later line must
            // fail against the empty allowed set instead of being silently
            // ignored.
            RecordIndicator::EndOfData => Record::EndOfData(EndOfData::deserialize(&fields)?),
        };

        self.state.previous = Some(indicator);
        Ok(record)
    }
}

impl<R: BufRead> Iterator for Nem12Parser<R> {
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.finished {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.state.finished = true;
                Some(Err(e))
            }
        }
    }
}
