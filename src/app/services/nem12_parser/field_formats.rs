//! Primitives for the NEM12 fixed-width field formats
//!
//! The specification defines a small set of textual field types (Date(8),
//! DateTime(12), VarChar(n), Char(n), Numeric(n)); each primitive here
//! decodes one of them into a typed value or fails with a
//! [`FieldFormatError`] naming the offending value.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::error::FieldFormatError;

type FieldResult<T> = Result<T, FieldFormatError>;

/// Parse a Date(8) field: a strict 8-digit `YYYYMMDD` calendar date.
pub fn date8(value: &str) -> FieldResult<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldFormatError::InvalidDate {
            value: value.to_string(),
        });
    }
    NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| FieldFormatError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parse a DateTime(12) field: a strict 12-digit `YYYYMMDDHHMM` value.
///
/// The time standard for the end of a day is 00:00 of the following day, so
/// an exact-midnight value is advanced by one calendar day.
pub fn date_time12(value: &str) -> FieldResult<NaiveDateTime> {
    if value.len() != 12 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldFormatError::InvalidDateTime {
            value: value.to_string(),
        });
    }
    let parsed = NaiveDateTime::parse_from_str(value, "%Y%m%d%H%M").map_err(|_| {
        FieldFormatError::InvalidDateTime {
            value: value.to_string(),
        }
    })?;

    if parsed.time() == NaiveTime::MIN {
        Ok(parsed + Duration::days(1))
    } else {
        Ok(parsed)
    }
}

/// Parse a VarChar(n) field: any text up to `max_length` characters.
pub fn var_char(max_length: usize, value: &str) -> FieldResult<String> {
    if value.len() > max_length {
        return Err(FieldFormatError::ExceedsMaxLength {
            value: value.to_string(),
            max_length,
        });
    }
    Ok(value.to_string())
}

/// Parse a Char(n) field: text of exactly `length` characters.
pub fn char_exact(length: usize, value: &str) -> FieldResult<String> {
    if value.len() != length {
        return Err(FieldFormatError::LengthMismatch {
            value: value.to_string(),
            length,
        });
    }
    Ok(value.to_string())
}

/// Parse a Numeric(n) field: an integer of at most `max_digits` digits.
pub fn numeric(max_digits: usize, value: &str) -> FieldResult<u32> {
    if value.len() > max_digits {
        return Err(FieldFormatError::ExceedsMaxLength {
            value: value.to_string(),
            max_length: max_digits,
        });
    }
    value
        .parse::<u32>()
        .map_err(|_| FieldFormatError::NotNumeric {
            value: value.to_string(),
        })
}
