//! Shared fixtures for ingestion tests


use chrono::{NaiveDate, NaiveDateTime};

pub const HEADER_LINE: &str = "100,NEM12,200506081149,MDA1,Ret1";

pub fn ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn details_line(nmi: &str, uom: &str, interval_length: &str) -> String {
    format!("200,{nmi},E1Q1,1,E1,N1,METSER123,{uom},{interval_length},")
}

pub fn interval_line(date: &str, samples: usize, value: &str) -> String {
    let values = vec![value; samples].join(",");
    format!("300,{date},{values},A,,,20050610120000,20050610121530")
}

/// Header, two 30-minute kWh blocks of four days each, terminator.
pub fn two_block_file() -> String {
    let mut lines = vec![HEADER_LINE.to_string()];
    for nmi in ["NMI0000001", "NMI0000002"] {
        lines.push(details_line(nmi, "kWh", "30"));
        for day in ["20050301", "20050302", "20050303", "20050304"] {
            lines.push(interval_line(day, 48, "1.111"));
        }
    }
    lines.push("900".to_string());
    lines.join("\n") + "\n"
}

/// A minimal upload: one block, one day of 30-minute samples.
pub fn single_day_file(nmi: &str, uom: &str, value: &str) -> String {
    [
        HEADER_LINE.to_string(),
        details_line(nmi, uom, "30"),
        interval_line("20050301", 48, value),
        "900".to_string(),
    ]
    .join("\n")
        + "\n"
}
