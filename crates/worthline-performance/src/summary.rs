//! Period summary: performance of one period from its endpoint snapshots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use worthline_core::types::{Period, ValuationPosition};
use worthline_core::yearfrac::{ActualJulian, YearFraction};

use crate::aggregation::{aggregate_market_value, aggregate_total_basis, PositionTotal};
use crate::cagr::{evaluate_cagr, evaluate_period_return, CagrUndefined};
use crate::report::PeriodReport;

/// Performance of a single period.
///
/// Built from a [`Period`] and the positions valued at its beginning and at
/// its end. Either collection may be empty. Every figure is derived on demand
/// from those three inputs; the summary is immutable and `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use worthline_core::types::{Period, ValuationPosition};
/// use worthline_performance::PeriodSummary;
/// use rust_decimal_macros::dec;
///
/// let period = Period::parse("2018-01-01T12:00:00Z", "2021-01-01T12:00:00Z").unwrap();
/// let summary = PeriodSummary::new(period)
///     .with_beginning_positions([ValuationPosition::new("X", "1", "Bond", dec!(1), dec!(10000))])
///     .with_ending_positions([ValuationPosition::new("X", "1", "Bond", dec!(1), dec!(19000))]);
///
/// assert_eq!(summary.beginning_market_value(), Some(dec!(10000)));
/// let cagr = summary.single_period_cagr().unwrap();
/// assert!((cagr - 0.2385).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    period: Period,
    #[serde(default)]
    beginning_positions: Vec<ValuationPosition>,
    #[serde(default)]
    ending_positions: Vec<ValuationPosition>,
}

impl PeriodSummary {
    /// Creates a summary with no positions on either side.
    #[must_use]
    pub fn new(period: Period) -> Self {
        Self {
            period,
            beginning_positions: Vec::new(),
            ending_positions: Vec::new(),
        }
    }

    /// Creates a summary; omitted collections are treated as empty.
    #[must_use]
    pub fn from_parts(
        period: Period,
        beginning_positions: Option<Vec<ValuationPosition>>,
        ending_positions: Option<Vec<ValuationPosition>>,
    ) -> Self {
        Self {
            period,
            beginning_positions: beginning_positions.unwrap_or_default(),
            ending_positions: ending_positions.unwrap_or_default(),
        }
    }

    /// Sets the positions valued at the start of the period.
    #[must_use]
    pub fn with_beginning_positions(
        mut self,
        positions: impl IntoIterator<Item = ValuationPosition>,
    ) -> Self {
        self.beginning_positions = positions.into_iter().collect();
        self
    }

    /// Sets the positions valued at the end of the period.
    #[must_use]
    pub fn with_ending_positions(
        mut self,
        positions: impl IntoIterator<Item = ValuationPosition>,
    ) -> Self {
        self.ending_positions = positions.into_iter().collect();
        self
    }

    /// The period covered.
    #[must_use]
    pub fn period(&self) -> &Period {
        &self.period
    }

    /// Positions at the start of the period.
    #[must_use]
    pub fn beginning_positions(&self) -> &[ValuationPosition] {
        &self.beginning_positions
    }

    /// Positions at the end of the period.
    #[must_use]
    pub fn ending_positions(&self) -> &[ValuationPosition] {
        &self.ending_positions
    }

    // =========================================================================
    // DURATION
    // =========================================================================

    /// Period length in 365.25-day years of elapsed time. `0.0` for an
    /// instant.
    #[must_use]
    pub fn years_in_period(&self) -> f64 {
        ActualJulian.period_years(&self.period)
    }

    // =========================================================================
    // VALUES
    // =========================================================================

    /// Beginning market value with its aggregation state.
    #[must_use]
    pub fn beginning_total(&self) -> PositionTotal {
        aggregate_market_value(&self.beginning_positions)
    }

    /// Ending market value with its aggregation state.
    #[must_use]
    pub fn ending_total(&self) -> PositionTotal {
        aggregate_market_value(&self.ending_positions)
    }

    /// Sum of beginning market values; `None` without beginning positions.
    #[must_use]
    pub fn beginning_market_value(&self) -> Option<Decimal> {
        self.beginning_total().value()
    }

    /// Sum of ending market values; `None` without ending positions.
    #[must_use]
    pub fn ending_market_value(&self) -> Option<Decimal> {
        self.ending_total().value()
    }

    /// Sum of beginning cost basis; `None` without beginning positions.
    #[must_use]
    pub fn beginning_total_basis(&self) -> Option<Decimal> {
        aggregate_total_basis(&self.beginning_positions).value()
    }

    /// Sum of ending cost basis; `None` without ending positions.
    #[must_use]
    pub fn ending_total_basis(&self) -> Option<Decimal> {
        aggregate_total_basis(&self.ending_positions).value()
    }

    /// Ending less beginning market value.
    #[must_use]
    pub fn market_value_delta(&self) -> Option<Decimal> {
        checked_delta(self.beginning_market_value(), self.ending_market_value())
    }

    /// Ending less beginning cost basis.
    #[must_use]
    pub fn total_basis_delta(&self) -> Option<Decimal> {
        checked_delta(self.beginning_total_basis(), self.ending_total_basis())
    }

    /// Ending market value less ending cost basis.
    #[must_use]
    pub fn unrealized_gain(&self) -> Option<Decimal> {
        checked_delta(self.ending_total_basis(), self.ending_market_value())
    }

    // =========================================================================
    // RETURNS
    // =========================================================================

    /// Cumulative return over the period, `ending / beginning - 1`.
    #[must_use]
    pub fn single_period_return(&self) -> Option<f64> {
        evaluate_period_return(self.beginning_market_value(), self.ending_market_value()).ok()
    }

    /// CAGR, or the reason it is undefined.
    pub fn cagr_outcome(&self) -> Result<f64, CagrUndefined> {
        let outcome = evaluate_cagr(
            self.beginning_market_value(),
            self.ending_market_value(),
            self.years_in_period(),
        );
        if let Err(reason) = outcome {
            tracing::debug!(
                period = %self.period,
                beginning_count = self.beginning_positions.len(),
                ending_count = self.ending_positions.len(),
                %reason,
                "CAGR undefined"
            );
        }
        outcome
    }

    /// Compound annual growth rate; `None` when it has no defined value.
    #[must_use]
    pub fn single_period_cagr(&self) -> Option<f64> {
        self.cagr_outcome().ok()
    }

    // =========================================================================
    // SCOPING
    // =========================================================================

    /// Same period restricted to the positions of one account.
    #[must_use]
    pub fn for_account(&self, account_id: &str) -> Self {
        let keep = |positions: &[ValuationPosition]| -> Vec<ValuationPosition> {
            positions
                .iter()
                .filter(|p| p.account_id() == account_id)
                .cloned()
                .collect()
        };
        Self {
            period: self.period,
            beginning_positions: keep(&self.beginning_positions),
            ending_positions: keep(&self.ending_positions),
        }
    }

    /// Distinct account ids across both collections, sorted.
    #[must_use]
    pub fn account_ids(&self) -> Vec<&str> {
        self.beginning_positions
            .iter()
            .chain(&self.ending_positions)
            .map(ValuationPosition::account_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Snapshot of every derived figure.
    #[must_use]
    pub fn report(&self) -> PeriodReport {
        PeriodReport::from_summary(self)
    }
}

fn checked_delta(from: Option<Decimal>, to: Option<Decimal>) -> Option<Decimal> {
    to?.checked_sub(from?)
}
