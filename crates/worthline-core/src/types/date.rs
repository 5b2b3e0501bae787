//! Calendar date and instant types.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{WorthlineError, WorthlineResult};

/// A point in time. Period boundaries are instants, not calendar days.
pub type Timestamp = DateTime<Utc>;

/// Parses an RFC 3339 instant such as `2020-06-01T12:00:00Z`.
///
/// # Errors
///
/// Returns `WorthlineError::InvalidDate` if the text is not RFC 3339.
pub fn parse_timestamp(s: &str) -> WorthlineResult<Timestamp> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| WorthlineError::invalid_date(format!("Cannot parse instant {s}: {e}")))
}

/// A calendar date for snapshot bookkeeping.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Dates convert to
/// instants explicitly (`start_of_day`, `at_hour`) so that every duration
/// computation downstream works on elapsed time.
///
/// # Example
///
/// ```rust
/// use worthline_core::types::Date;
///
/// let date = Date::from_ymd(2020, 6, 1).unwrap();
/// let noon = date.at_hour(12).unwrap();
/// assert_eq!(noon.to_rfc3339(), "2020-06-01T12:00:00+00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `WorthlineError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> WorthlineResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| WorthlineError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Returns the instant at midnight UTC on this date.
    #[must_use]
    pub fn start_of_day(&self) -> Timestamp {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// Returns the instant at the given whole hour UTC on this date.
    ///
    /// # Errors
    ///
    /// Returns `WorthlineError::InvalidDate` if `hour` is not in 0..24.
    pub fn at_hour(&self, hour: u32) -> WorthlineResult<Timestamp> {
        self.0
            .and_hms_opt(hour, 0, 0)
            .map(|dt| dt.and_utc())
            .ok_or_else(|| WorthlineError::invalid_date(format!("{self} at hour {hour}")))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}
