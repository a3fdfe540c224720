//! Excel workbook access - loading record sheets and writing the contact field back

pub mod loader;
pub mod writer;

pub use loader::WorkbookLoader;
pub use writer::ContactWriter;

use chrono::{Duration, NaiveDate};

/// Convert an Excel serial date to a calendar date.
///
/// Excel stores dates as days since the 1900 epoch; day 1 is 1900-01-01 but
/// the epoch anchor is 1899-12-30 because of the fictional 1900-02-29.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}

/// Convert a calendar date back to its Excel serial number.
pub fn date_to_serial(date: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    (date - epoch).num_days() as f64
}
