//! Data models for normalized meter consumption
//!
//! The parser's interval records are flattened into one row per sample for
//! bulk storage; this module defines that row.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One normalized consumption row: a meter identifier, an interval start
/// time and a quantity in kilowatt hours.
///
/// Times are naive. The NEM12 format carries no timezone, so readings are
/// stored exactly as presented; any timezone policy belongs to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterReading {
    /// Meter identifier from the owning data details record
    pub nmi: String,

    /// Interval start time: day start plus (index x interval length) minutes
    #[serde(rename = "timestamp")]
    pub start_time: NaiveDateTime,

    /// Interval quantity normalized to kilowatt hours
    #[serde(rename = "consumption")]
    pub consumption_kwh: f64,
}

impl MeterReading {
    pub fn new(nmi: impl Into<String>, start_time: NaiveDateTime, consumption_kwh: f64) -> Self {
        Self {
            nmi: nmi.into(),
            start_time,
            consumption_kwh,
        }
    }
}
