//! Campaign schedule date handling
//!
//! Schedules are entered as separate date and time fields and combined into
//! a single naive timestamp for the backend, which stores local time without
//! an offset.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Errors from combining schedule fields
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid schedule date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Invalid schedule time '{value}', expected HH:MM")]
    InvalidTime { value: String },
}

/// Combine a `YYYY-MM-DD` date and an `HH:MM` (or `HH:MM:SS`) time into one
/// timestamp.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use calldeck_common::time::schedule::combine_date_time;
///
/// let when = combine_date_time("2026-09-01", "14:30").unwrap();
/// assert_eq!(when.to_string(), "2026-09-01 14:30:00");
/// # }
/// ```
pub fn combine_date_time(date: &str, time: &str) -> Result<NaiveDateTime, ScheduleError> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate { value: date.to_string() })?;

    let time = time.trim();
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| ScheduleError::InvalidTime { value: time.to_string() })?;

    Ok(date.and_time(time))
}
