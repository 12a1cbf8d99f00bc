//! Test fixtures and sample data for integration tests.

use address_book::{ContactRecord, Directory};
use chrono::{NaiveDate, NaiveDateTime};

/// Create a record with a name and the given phones.
pub fn sample_record(name: &str, phones: &[&str]) -> ContactRecord {
    let mut record = ContactRecord::new(name, None).expect("valid name");
    for phone in phones {
        record.add_phone(*phone).expect("valid phone");
    }
    record
}

/// Create a directory holding one phone-less record per name, in order.
#[allow(dead_code)]
pub fn sample_directory(names: &[&str]) -> Directory {
    names.iter().map(|name| sample_record(name, &[])).collect()
}

/// Midnight on the given date.
#[allow(dead_code)]
pub fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}
