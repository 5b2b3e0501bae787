//! Closed time interval between two instants.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::{parse_timestamp, Date, Timestamp};
use crate::error::{WorthlineError, WorthlineResult};

/// A closed interval `[start, end]` with `end >= start`.
///
/// The ordering invariant is checked on construction (including
/// deserialization), so every `Period` in circulation has a non-negative
/// elapsed duration. Zero-length periods are valid.
///
/// # Example
///
/// ```rust
/// use worthline_core::types::Period;
///
/// let period = Period::parse("2020-06-01T12:00:00Z", "2020-12-02T12:00:00Z").unwrap();
/// assert_eq!(period.elapsed().num_days(), 184);
/// assert!(Period::parse("2021-01-02T00:00:00Z", "2021-01-01T00:00:00Z").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    start: Timestamp,
    end: Timestamp,
}

#[derive(Deserialize)]
struct RawPeriod {
    start: Timestamp,
    end: Timestamp,
}

impl TryFrom<RawPeriod> for Period {
    type Error = WorthlineError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Period::new(raw.start, raw.end)
    }
}

impl Period {
    /// Creates a period from two instants.
    ///
    /// # Errors
    ///
    /// Returns `WorthlineError::InvalidPeriod` if `end` is before `start`.
    pub fn new(start: Timestamp, end: Timestamp) -> WorthlineResult<Self> {
        if end < start {
            return Err(WorthlineError::invalid_period(
                start.to_rfc3339(),
                end.to_rfc3339(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Creates a zero-length period at a single instant.
    #[must_use]
    pub fn instant(at: Timestamp) -> Self {
        Self { start: at, end: at }
    }

    /// Creates a period from midnight UTC on `start` to midnight UTC on `end`.
    ///
    /// # Errors
    ///
    /// Returns `WorthlineError::InvalidPeriod` if `end` is before `start`.
    pub fn from_dates(start: Date, end: Date) -> WorthlineResult<Self> {
        Self::new(start.start_of_day(), end.start_of_day())
    }

    /// Creates a period from two RFC 3339 instants.
    ///
    /// # Errors
    ///
    /// Returns `WorthlineError::InvalidDate` for unparseable text and
    /// `WorthlineError::InvalidPeriod` if `end` is before `start`.
    pub fn parse(start: &str, end: &str) -> WorthlineResult<Self> {
        Self::new(parse_timestamp(start)?, parse_timestamp(end)?)
    }

    /// Start instant.
    #[must_use]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// End instant.
    #[must_use]
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Elapsed time between start and end. Never negative.
    #[must_use]
    pub fn elapsed(&self) -> TimeDelta {
        self.end - self.start
    }

    /// True when start and end are the same instant.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Period {
    /// ISO 8601 interval notation, `start/end`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn test_new_rejects_reversed() {
        let err =
            Period::new(ts("2021-01-02T00:00:00Z"), ts("2021-01-01T00:00:00Z")).unwrap_err();
        assert!(matches!(err, WorthlineError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_zero_length_is_valid() {
        let at = ts("2020-12-02T12:00:00Z");
        let period = Period::new(at, at).unwrap();
        assert!(period.is_instant());
        assert_eq!(period, Period::instant(at));
        assert_eq!(period.elapsed(), TimeDelta::zero());
    }

    #[test]
    fn test_from_dates() {
        let period = Period::from_dates(
            Date::from_ymd(2018, 1, 1).unwrap(),
            Date::from_ymd(2021, 1, 1).unwrap(),
        )
        .unwrap();
        // 2020 is a leap year
        assert_eq!(period.elapsed().num_days(), 365 * 3 + 1);
    }

    #[test]
    fn test_display() {
        let period = Period::parse("2020-06-01T12:00:00Z", "2020-12-02T12:00:00Z").unwrap();
        assert_eq!(
            period.to_string(),
            "2020-06-01T12:00:00+00:00/2020-12-02T12:00:00+00:00"
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Period =
            serde_json::from_str(r#"{"start":"2020-01-01T00:00:00Z","end":"2020-02-01T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(ok.elapsed().num_days(), 31);

        let bad = serde_json::from_str::<Period>(
            r#"{"start":"2020-02-01T00:00:00Z","end":"2020-01-01T00:00:00Z"}"#,
        );
        assert!(bad.is_err());
    }
}
