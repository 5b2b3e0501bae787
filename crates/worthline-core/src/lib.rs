//! # Worthline Core
//!
//! Core types and abstractions for the Worthline period performance library.
//!
//! This crate provides the building blocks the analytics crates share:
//!
//! - **Types**: `Date`, `Timestamp`, `Period`, `ValuationPosition`
//! - **Year Fractions**: Elapsed-time conversion to fractional years
//! - **Errors**: The `WorthlineError` type for malformed inputs
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: a `Period` cannot be built with its end before its start
//! - **Exact Money**: amounts are `Decimal`, never `f64`
//! - **Elapsed Time**: durations come from instants, not calendar arithmetic
//!
//! ## Example
//!
//! ```rust
//! use worthline_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let period = Period::parse("2018-01-01T12:00:00Z", "2021-01-01T12:00:00Z").unwrap();
//! let years = ActualJulian.period_years(&period);
//! assert!((years - 3.0007).abs() < 1e-4);
//!
//! let position = ValuationPosition::new("X", "1", "Bond", dec!(1), dec!(10000));
//! assert_eq!(position.market_value(), dec!(10000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod constants;
pub mod error;
pub mod types;
pub mod yearfrac;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{WorthlineError, WorthlineResult};
    pub use crate::types::{parse_timestamp, Date, Period, Timestamp, ValuationPosition};
    pub use crate::yearfrac::{ActualJulian, YearFraction};
}

// Re-export commonly used types at crate root
pub use error::{WorthlineError, WorthlineResult};
pub use types::{Date, Period, Timestamp, ValuationPosition};
