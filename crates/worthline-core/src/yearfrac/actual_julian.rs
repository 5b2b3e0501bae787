//! Actual/Julian year fraction.

use chrono::TimeDelta;

use super::YearFraction;
use crate::constants::SECONDS_PER_JULIAN_YEAR;
use crate::types::Timestamp;

/// Actual elapsed time over a Julian year of 365.25 days.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Elapsed Seconds}}{365.25 \times 86400}$$
///
/// The numerator is wall-clock elapsed time, so the result moves
/// continuously with the end instant (a twelve hour shift changes it by
/// `0.5 / 365.25`) and leap days are counted as the extra day they are.
/// Identical instants give exactly `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActualJulian;

impl ActualJulian {
    /// Elapsed seconds, with nanosecond resolution where it fits in `i64`.
    fn elapsed_seconds(delta: TimeDelta) -> f64 {
        match delta.num_nanoseconds() {
            Some(nanos) => nanos as f64 / 1e9,
            // beyond ~292 years nanoseconds overflow; milliseconds are plenty
            None => delta.num_milliseconds() as f64 / 1e3,
        }
    }
}

impl YearFraction for ActualJulian {
    fn name(&self) -> &'static str {
        "ACT/365.25"
    }

    fn year_fraction(&self, start: Timestamp, end: Timestamp) -> f64 {
        Self::elapsed_seconds(end - start) / SECONDS_PER_JULIAN_YEAR
    }
}
