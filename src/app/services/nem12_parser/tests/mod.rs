//! Shared fixtures for NEM12 parser tests

mod record_tests;

use chrono::{NaiveDate, NaiveDateTime};

/// A well-formed header line.
pub const HEADER_LINE: &str = "100,NEM12,200506081149,MDA1,Ret1";

/// Split a raw line the way the parser does.
pub fn split(line: &str) -> Vec<&str> {
    line.split(',').collect()
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    ymd(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}

/// A 200 line with the given NMI, UOM token and interval length.
pub fn details_line(nmi: &str, uom: &str, interval_length: &str) -> String {
    format!("200,{nmi},E1Q1,1,E1,N1,METSER123,{uom},{interval_length},")
}

/// A 300 line with `samples` copies of `value` for the given day.
pub fn interval_line(date: &str, samples: usize, value: &str) -> String {
    let values = vec![value; samples].join(",");
    format!("300,{date},{values},A,,,20050610120000,20050610121530")
}
