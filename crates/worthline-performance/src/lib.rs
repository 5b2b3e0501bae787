//! # Worthline Performance
//!
//! Period performance from valuation snapshots.
//!
//! Given the positions valued at the start and at the end of a period, this
//! crate answers "what was the annualized return over this period?".
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: no I/O, no shared state; summaries are plain values
//! - **Absence, not errors**: empty snapshots, non-positive values and
//!   zero-length periods give `None`, never NaN, infinity or a panic
//! - **Elapsed time**: years are real elapsed time over 365.25 days
//! - **Config-driven parallelism**: optional rayon support for batches
//!
//! ## Quick Start
//!
//! ```rust
//! use worthline_performance::prelude::*;
//!
//! let period = Period::parse("2013-06-01T12:00:00Z", "2018-09-08T12:00:00Z").unwrap();
//! let summary = PeriodSummary::new(period)
//!     .with_beginning_positions([ValuationPosition::new("X", "1", "LC", dec!(1), dec!(10000.00))])
//!     .with_ending_positions([ValuationPosition::new("X", "1", "LC", dec!(1), dec!(16897.14))]);
//!
//! assert!((summary.years_in_period() - 5.271).abs() < 1e-3);
//! assert!((summary.single_period_cagr().unwrap() - 0.1046).abs() < 1e-4);
//! ```
//!
//! ## Module Overview
//!
//! - [`aggregation`] - Market value and basis totals over positions
//! - [`cagr`] - Growth ratio, cumulative return, CAGR
//! - [`summary`] - [`PeriodSummary`]
//! - [`report`] - [`PeriodReport`] snapshot and display
//! - [`batch`] - Evaluating many independent periods
//! - [`config`] - [`SummaryConfig`]
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel batch evaluation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]

pub mod aggregation;
pub mod batch;
pub mod cagr;
pub mod config;
pub mod parallel;
pub mod report;
pub mod summary;

pub use aggregation::{aggregate_market_value, aggregate_total_basis, PositionTotal};
pub use batch::summarize_periods;
pub use cagr::{compound_annual_growth_rate, evaluate_cagr, CagrUndefined};
pub use config::SummaryConfig;
pub use report::PeriodReport;
pub use summary::PeriodSummary;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregation::{aggregate_market_value, aggregate_total_basis, PositionTotal};
    pub use crate::batch::summarize_periods;
    pub use crate::cagr::{compound_annual_growth_rate, evaluate_cagr, CagrUndefined};
    pub use crate::config::SummaryConfig;
    pub use crate::report::PeriodReport;
    pub use crate::summary::PeriodSummary;

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
    pub use worthline_core::types::{Date, Period, Timestamp, ValuationPosition};
}
