//! Structural constants for the NEM12 interchange format
//!
//! This module collects the fixed counts and tokens the format defines,
//! used by the record deserializers and the parser state machine.

/// Literal version token required in the second field of a header record.
pub const FORMAT_VERSION: &str = "NEM12";

/// Minutes in one calendar day of interval data.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Interval lengths permitted by the specification, in minutes.
pub const ALLOWED_INTERVAL_LENGTHS: &[u32] = &[5, 15, 30];

/// Maximum length of the FromParticipant / ToParticipant header fields.
pub const PARTICIPANT_MAX_LENGTH: usize = 10;

/// Exact length of the NMI suffix field of a data details record.
pub const NMI_SUFFIX_LENGTH: usize = 2;

/// Maximum length of the meter serial number field of a data details record.
pub const METER_SERIAL_MAX_LENGTH: usize = 12;

/// Exact field counts per record kind, including the leading indicator field
pub mod field_counts {
    /// 100 record: indicator, version, created, from and to participant
    pub const HEADER: usize = 5;

    /// 200 record: indicator plus nine NMI/register description fields
    pub const DATA_DETAILS: usize = 10;

    /// Non-sample fields of a 300 record: the indicator, the interval date
    /// and the five trailing metadata fields
    pub const INTERVAL_DATA_FIXED: usize = 7;

    /// 400 record: recognized but payload-opaque
    pub const INTERVAL_EVENT: usize = 6;

    /// 500 record: recognized but payload-opaque
    pub const B2B_DETAILS: usize = 5;

    /// 900 record: the bare terminator
    pub const END_OF_DATA: usize = 1;
}
