//! Tests for per-variant record deserialization

use pretty_assertions::assert_eq;

use crate::app::services::nem12_parser::error::{FieldFormatError, LineError, StructuralError};
use crate::app::services::nem12_parser::records::{
    B2BDetails, DataDetails, EndOfData, Header, IntervalData, IntervalEvent,
};
use crate::app::services::nem12_parser::units::UnitOfMeasure;

use super::{details_line, interval_line, split, ymd, ymd_hm, HEADER_LINE};

fn details_30min() -> DataDetails {
    DataDetails::deserialize(&split(&details_line("VABD000163", "kWh", "30"))).unwrap()
}

#[test]
fn header_retains_created_time_and_participants() {
    let header = Header::deserialize(&split(HEADER_LINE)).unwrap();
    assert_eq!(header.created, ymd_hm(2005, 6, 8, 11, 49));
    assert_eq!(header.from_participant, "MDA1");
    assert_eq!(header.to_participant, "Ret1");
}

#[test]
fn header_rejects_wrong_field_count() {
    let err = Header::deserialize(&split("100,NEM12,200506081149,MDA1")).unwrap_err();
    assert!(matches!(
        err,
        LineError::Structural(StructuralError::FieldCount {
            record: "header",
            found: 4,
        })
    ));
    assert!(Header::deserialize(&split("100,NEM12,200506081149,MDA1,Ret1,extra")).is_err());
}

#[test]
fn header_rejects_unsupported_version() {
    let err = Header::deserialize(&split("100,NEM13,200506081149,MDA1,Ret1")).unwrap_err();
    assert!(matches!(
        err,
        LineError::Structural(StructuralError::UnsupportedHeaderVersion { .. })
    ));
    assert_eq!(err.to_string(), "unsupported header version: NEM13");
}

#[test]
fn header_rejects_overlong_participant() {
    let err = Header::deserialize(&split("100,NEM12,200506081149,PARTICIPANT01,Ret1")).unwrap_err();
    assert!(matches!(
        err,
        LineError::FieldFormat(FieldFormatError::ExceedsMaxLength { max_length: 10, .. })
    ));
}

#[test]
fn data_details_parses_context_fields() {
    let details = details_30min();
    assert_eq!(details.nmi, "VABD000163");
    assert_eq!(details.nmi_suffix, "E1");
    assert_eq!(details.meter_serial_number, "METSER123");
    assert_eq!(details.unit_of_measure, UnitOfMeasure::KWh);
    assert_eq!(details.interval_length, 30);
    assert_eq!(details.intervals_per_day(), 48);
}

#[test]
fn data_details_accepts_each_allowed_interval_length() {
    for (length, expected) in [("5", 288), ("15", 96), ("30", 48)] {
        let details =
            DataDetails::deserialize(&split(&details_line("NMI0000001", "kWh", length))).unwrap();
        assert_eq!(details.intervals_per_day(), expected);
    }
}

#[test]
fn data_details_rejects_out_of_range_interval_length() {
    for length in ["14", "60", "0"] {
        let err = DataDetails::deserialize(&split(&details_line("NMI0000001", "kWh", length)))
            .unwrap_err();
        assert!(matches!(
            err,
            LineError::FieldFormat(FieldFormatError::InvalidIntervalLength { .. })
        ));
    }
    let err =
        DataDetails::deserialize(&split(&details_line("NMI0000001", "kWh", "14"))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "interval length is 14 but must be one of 5, 15 or 30"
    );
}

#[test]
fn data_details_rejects_unresolvable_unit() {
    let err =
        DataDetails::deserialize(&split(&details_line("NMI0000001", "XYZ", "30"))).unwrap_err();
    assert!(matches!(
        err,
        LineError::Structural(StructuralError::UnresolvableUnitOfMeasure { .. })
    ));
    assert_eq!(err.to_string(), "unresolvable unit of measure: XYZ");
}

#[test]
fn data_details_accepts_nmi_without_format_checks() {
    // The NMI field gets no length or character-set validation.
    let details = DataDetails::deserialize(&split(&details_line("x", "kWh", "30"))).unwrap();
    assert_eq!(details.nmi, "x");
}

#[test]
fn data_details_rejects_wrong_field_count() {
    let err =
        DataDetails::deserialize(&split("200,VABD000163,E1Q1,1,E1,N1,METSER123,kWh,30")).unwrap_err();
    assert!(matches!(
        err,
        LineError::Structural(StructuralError::FieldCount {
            record: "data details",
            found: 9,
        })
    ));
}

#[test]
fn interval_data_derives_start_times_from_position() {
    let details = details_30min();
    let line = interval_line("20050301", 48, "1.111");
    let data = IntervalData::deserialize(&split(&line), &details).unwrap();
    assert_eq!(data.interval_date, ymd(2005, 3, 1));
    assert_eq!(data.interval_values.len(), 48);
    assert_eq!(data.interval_values[0].start_time, ymd_hm(2005, 3, 1, 0, 0));
    assert_eq!(data.interval_values[1].start_time, ymd_hm(2005, 3, 1, 0, 30));
    assert_eq!(data.interval_values[47].start_time, ymd_hm(2005, 3, 1, 23, 30));
    assert!(data.interval_values.iter().all(|v| v.quantity == 1.111));
}

#[test]
fn interval_data_honours_the_block_interval_length() {
    let details =
        DataDetails::deserialize(&split(&details_line("NMI0000001", "kWh", "5"))).unwrap();
    let data =
        IntervalData::deserialize(&split(&interval_line("20050301", 288, "0.5")), &details)
            .unwrap();
    assert_eq!(data.interval_values.len(), 288);
    assert_eq!(data.interval_values[12].start_time, ymd_hm(2005, 3, 1, 1, 0));
}

#[test]
fn interval_data_rejects_sample_count_mismatch() {
    let details = details_30min();
    for samples in [47, 49] {
        let err =
            IntervalData::deserialize(&split(&interval_line("20050301", samples, "1.111")), &details)
                .unwrap_err();
        assert!(matches!(
            err,
            LineError::Structural(StructuralError::IntervalFieldCount)
        ));
    }
}

#[test]
fn interval_data_rejects_non_numeric_sample() {
    let details = details_30min();
    let mut values = vec!["1.111"; 48];
    values[4] = "bogus";
    let line = format!(
        "300,20050301,{},A,,,20050610120000,20050610121530",
        values.join(",")
    );
    match IntervalData::deserialize(&split(&line), &details).unwrap_err() {
        LineError::FieldFormat(FieldFormatError::InvalidIntervalValue { index, value }) => {
            assert_eq!(index, 5);
            assert_eq!(value, "bogus");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn interval_data_rejects_non_finite_samples() {
    let details = details_30min();
    for bad in ["NaN", "inf", "-inf"] {
        let mut values = vec!["1.111"; 48];
        values[0] = bad;
        let line = format!(
            "300,20050301,{},A,,,20050610120000,20050610121530",
            values.join(",")
        );
        assert!(matches!(
            IntervalData::deserialize(&split(&line), &details).unwrap_err(),
            LineError::FieldFormat(FieldFormatError::InvalidIntervalValue { index: 1, .. })
        ));
    }
}

#[test]
fn interval_data_rejects_malformed_date() {
    let details = details_30min();
    let err = IntervalData::deserialize(&split(&interval_line("2005030", 48, "1.111")), &details)
        .unwrap_err();
    assert!(matches!(
        err,
        LineError::FieldFormat(FieldFormatError::InvalidDate { .. })
    ));
}

#[test]
fn opaque_records_validate_field_counts_only() {
    assert!(IntervalEvent::deserialize(&split("400,1,20,F14,76,")).is_ok());
    assert!(matches!(
        IntervalEvent::deserialize(&split("400,1,20,F14,76")).unwrap_err(),
        LineError::Structural(StructuralError::FieldCount {
            record: "interval event",
            ..
        })
    ));

    assert!(B2BDetails::deserialize(&split("500,S,RETNSRVCEORD1,20031220154500,001123.5")).is_ok());
    assert!(matches!(
        B2BDetails::deserialize(&split("500,S,RETNSRVCEORD1,20031220154500")).unwrap_err(),
        LineError::Structural(StructuralError::FieldCount {
            record: "b2b details",
            ..
        })
    ));

    assert!(EndOfData::deserialize(&split("900")).is_ok());
    assert!(matches!(
        EndOfData::deserialize(&split("900,")).unwrap_err(),
        LineError::Structural(StructuralError::FieldCount {
            record: "end of data",
            ..
        })
    ));
}
