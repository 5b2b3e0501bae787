//! Year fraction calculations for elapsed time.
//!
//! A year fraction turns the distance between two instants into a number of
//! years. Performance analytics annualize over *elapsed* time, so the
//! numerator is real duration to sub-second precision rather than a count of
//! calendar fields.
//!
//! # Supported Conventions
//!
//! - [`ActualJulian`]: elapsed seconds / seconds in a 365.25-day year
//!
//! # Usage
//!
//! ```rust
//! use worthline_core::types::Period;
//! use worthline_core::yearfrac::{ActualJulian, YearFraction};
//!
//! let period = Period::parse("2013-06-01T12:00:00Z", "2018-09-08T12:00:00Z").unwrap();
//! let years = ActualJulian.period_years(&period);
//! assert!((years - 5.2704).abs() < 1e-4);
//! ```

mod actual_julian;

pub use actual_julian::ActualJulian;

use crate::types::{Period, Timestamp};

/// Trait for year fraction conventions over instants.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait YearFraction: Send + Sync {
    /// Returns the name of the convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two instants.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Timestamp, end: Timestamp) -> f64;

    /// Year fraction spanned by a period. Never negative.
    fn period_years(&self, period: &Period) -> f64 {
        self.year_fraction(period.start(), period.end())
    }
}
