//! NEM12 record model and per-variant field deserialization
//!
//! Each line of a NEM12 file is one record; the leading indicator selects
//! the variant. Every deserializer receives the full ordered list of
//! comma-split fields for its line and enforces the exact field count before
//! interpreting any field, so a wrong count fails identically regardless of
//! field content.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::{
    field_counts, ALLOWED_INTERVAL_LENGTHS, FORMAT_VERSION, METER_SERIAL_MAX_LENGTH,
    MINUTES_PER_DAY, NMI_SUFFIX_LENGTH, PARTICIPANT_MAX_LENGTH,
};

use super::error::{FieldFormatError, LineError, StructuralError};
use super::field_formats::{char_exact, date8, date_time12, numeric, var_char};
use super::units::UnitOfMeasure;

/// The three-digit code classifying a line's structural role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordIndicator {
    Header,
    DataDetails,
    IntervalData,
    IntervalEvent,
    B2BDetails,
    EndOfData,
}

impl RecordIndicator {
    /// The literal indicator token as it appears in the file.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Header => "100",
            Self::DataDetails => "200",
            Self::IntervalData => "300",
            Self::IntervalEvent => "400",
            Self::B2BDetails => "500",
            Self::EndOfData => "900",
        }
    }

    /// Resolve a leading field token to an indicator, if it is one.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "100" => Some(Self::Header),
            "200" => Some(Self::DataDetails),
            "300" => Some(Self::IntervalData),
            "400" => Some(Self::IntervalEvent),
            "500" => Some(Self::B2BDetails),
            "900" => Some(Self::EndOfData),
            _ => None,
        }
    }
}

impl fmt::Display for RecordIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One parsed NEM12 record. The set of variants is closed; consumers match
/// exhaustively so a missing case is a compile-time concern.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Header(Header),
    DataDetails(DataDetails),
    IntervalData(IntervalData),
    IntervalEvent(IntervalEvent),
    B2BDetails(B2BDetails),
    EndOfData(EndOfData),
}

impl Record {
    pub fn indicator(&self) -> RecordIndicator {
        match self {
            Self::Header(_) => RecordIndicator::Header,
            Self::DataDetails(_) => RecordIndicator::DataDetails,
            Self::IntervalData(_) => RecordIndicator::IntervalData,
            Self::IntervalEvent(_) => RecordIndicator::IntervalEvent,
            Self::B2BDetails(_) => RecordIndicator::B2BDetails,
            Self::EndOfData(_) => RecordIndicator::EndOfData,
        }
    }
}

/// Header record (100): one per file, always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// File creation time from the DateTime(12) field
    pub created: NaiveDateTime,
    pub from_participant: String,
    pub to_participant: String,
}

impl Header {
    pub fn deserialize(fields: &[&str]) -> Result<Self, LineError> {
        if fields.len() != field_counts::HEADER {
            return Err(StructuralError::FieldCount {
                record: "header",
                found: fields.len(),
            }
            .into());
        }
        if fields[1] != FORMAT_VERSION {
            return Err(StructuralError::UnsupportedHeaderVersion {
                version: fields[1].to_string(),
            }
            .into());
        }
        Ok(Self {
            created: date_time12(fields[2])?,
            from_participant: var_char(PARTICIPANT_MAX_LENGTH, fields[3])?,
            to_participant: var_char(PARTICIPANT_MAX_LENGTH, fields[4])?,
        })
    }
}

/// NMI data details record (200): opens a metering context that owns every
/// following 300 record until the next 200 or the terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDetails {
    /// Meter identifier. The format fixes its width, but no format check is
    /// applied to this field.
    pub nmi: String,
    pub nmi_suffix: String,
    pub meter_serial_number: String,
    pub unit_of_measure: UnitOfMeasure,
    /// Minutes per interval sample, one of 5, 15 or 30
    pub interval_length: u32,
}

impl DataDetails {
    pub fn deserialize(fields: &[&str]) -> Result<Self, LineError> {
        if fields.len() != field_counts::DATA_DETAILS {
            return Err(StructuralError::FieldCount {
                record: "data details",
                found: fields.len(),
            }
            .into());
        }
        let interval_length = numeric(2, fields[8])?;
        if !ALLOWED_INTERVAL_LENGTHS.contains(&interval_length) {
            return Err(FieldFormatError::InvalidIntervalLength {
                found: interval_length,
            }
            .into());
        }
        let unit_of_measure: UnitOfMeasure =
            fields[7]
                .parse()
                .map_err(|e: super::units::UnknownUnit| {
                    StructuralError::UnresolvableUnitOfMeasure { token: e.token }
                })?;
        Ok(Self {
            nmi: fields[1].to_string(),
            nmi_suffix: char_exact(NMI_SUFFIX_LENGTH, fields[4])?,
            meter_serial_number: var_char(METER_SERIAL_MAX_LENGTH, fields[6])?,
            unit_of_measure,
            interval_length,
        })
    }

    /// Number of interval values every 300 record in this block must carry.
    pub fn intervals_per_day(&self) -> usize {
        (MINUTES_PER_DAY / self.interval_length) as usize
    }
}

/// A single interval sample: the metered quantity and its derived start time.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalValue {
    /// Quantity in the block's unit of measure
    pub quantity: f64,
    /// Day start plus (index x interval length) minutes
    pub start_time: NaiveDateTime,
}

/// Interval data record (300): one calendar day of samples for the current
/// data details context.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalData {
    pub interval_date: NaiveDate,
    /// Samples in chronological order, the first starting at local midnight
    pub interval_values: Vec<IntervalValue>,
}

impl IntervalData {
    pub fn deserialize(fields: &[&str], details: &DataDetails) -> Result<Self, LineError> {
        if fields.len() < 2 {
            return Err(StructuralError::IntervalFieldCount.into());
        }
        let interval_date = date8(fields[1])?;

        // The number of interval values must equal 1440 divided by the
        // interval length; checked before any sample is parsed.
        let expected = details.intervals_per_day();
        if fields.len() != expected + field_counts::INTERVAL_DATA_FIXED {
            return Err(StructuralError::IntervalFieldCount.into());
        }

        let day_start = NaiveDateTime::new(interval_date, NaiveTime::MIN);
        let interval_length = i64::from(details.interval_length);
        let mut interval_values = Vec::with_capacity(expected);
        for (index, raw) in fields[2..2 + expected].iter().enumerate() {
            let quantity = raw
                .parse::<f64>()
                .ok()
                .filter(|q| q.is_finite())
                .ok_or_else(|| FieldFormatError::InvalidIntervalValue {
                    index: index + 1,
                    value: raw.to_string(),
                })?;
            interval_values.push(IntervalValue {
                quantity,
                start_time: day_start + Duration::minutes(interval_length * index as i64),
            });
        }

        Ok(Self {
            interval_date,
            interval_values,
        })
    }
}

/// Interval event record (400): recognized and count-checked, payload not
/// decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalEvent;

impl IntervalEvent {
    pub fn deserialize(fields: &[&str]) -> Result<Self, LineError> {
        if fields.len() != field_counts::INTERVAL_EVENT {
            return Err(StructuralError::FieldCount {
                record: "interval event",
                found: fields.len(),
            }
            .into());
        }
        Ok(Self)
    }
}

/// B2B details record (500): recognized and count-checked, payload not
/// decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct B2BDetails;

impl B2BDetails {
    pub fn deserialize(fields: &[&str]) -> Result<Self, LineError> {
        if fields.len() != field_counts::B2B_DETAILS {
            return Err(StructuralError::FieldCount {
                record: "b2b details",
                found: fields.len(),
            }
            .into());
        }
        Ok(Self)
    }
}

/// End of data record (900): the single-field terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfData;

impl EndOfData {
    pub fn deserialize(fields: &[&str]) -> Result<Self, LineError> {
        if fields.len() != field_counts::END_OF_DATA {
            return Err(StructuralError::FieldCount {
                record: "end of data",
                found: fields.len(),
            }
            .into());
        }
        Ok(Self)
    }
}
