//! Timestamp parsing and arithmetic
//!
//! Session timestamps are zone-less date-times (`NaiveDateTime`); the
//! service does not interpret them against any timezone. "Now" is taken
//! as naive UTC so behavior does not depend on server-local configuration.

use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Get the current wall-clock time as a naive UTC timestamp
pub fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

/// Parse an ISO-8601 local date-time, with or without a seconds field
/// (`2024-05-20T09:00` and `2024-05-20T09:00:00` both accepted)
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|e| Error::InvalidInput(format!("Invalid timestamp '{}': {}", value, e)))
}

/// Parse a `YYYY-MM` year-month pair
pub fn parse_year_month(value: &str) -> Result<(i32, u32)> {
    let err = || Error::InvalidInput(format!("Invalid year-month '{}'", value));

    let (year_str, month_str) = value.split_once('-').ok_or_else(err)?;
    let year: i32 = year_str.parse().map_err(|_| err())?;
    let month: u32 = month_str.parse().map_err(|_| err())?;
    if !(1..=12).contains(&month) {
        return Err(err());
    }
    Ok((year, month))
}

/// Whole minutes from `from` to `to`, truncated toward zero.
/// Negative when `to` precedes `from`.
pub fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    to.signed_duration_since(from).num_minutes()
}

/// Whole days from `from` to `to`, truncated toward zero
pub fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// ISO calendar-date key (`YYYY-MM-DD`) for a timestamp
pub fn day_key(ts: NaiveDateTime) -> String {
    ts.date().format("%Y-%m-%d").to_string()
}

/// Build a timestamp from calendar and clock components (test convenience)
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_else(|| panic!("invalid date components {}-{}-{}", year, month, day))
}
