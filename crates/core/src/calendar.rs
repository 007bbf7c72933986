//! Calendar conversion
//!
//! Converts calendar fields into the absolute timestamp stored in a match's
//! `date` field. The registry itself never interprets dates; only seeding
//! and callers use this module.
//!
//! Timestamps are seconds since Unix epoch (1970-01-01 00:00:00 UTC).

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Convert calendar fields (UTC) into seconds since Unix epoch
///
/// # Errors
///
/// Returns `InvalidDate` if the fields do not name a real instant
/// (e.g. February 30th, hour 24) or if the instant is before the epoch.
pub fn to_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<u64> {
    let datetime = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .ok_or_else(|| {
            Error::InvalidDate(format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                year, month, day, hour, minute, second
            ))
        })?;

    let secs = datetime.and_utc().timestamp();
    u64::try_from(secs)
        .map_err(|_| Error::InvalidDate(format!("{} is before the Unix epoch", datetime)))
}

/// Convert a calendar date at midnight UTC into seconds since Unix epoch
pub fn to_date(year: i32, month: u32, day: u32) -> Result<u64> {
    to_timestamp(year, month, day, 0, 0, 0)
}
