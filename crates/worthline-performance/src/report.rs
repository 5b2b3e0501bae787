//! Serializable period report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use worthline_core::types::Period;

use crate::cagr::CagrUndefined;
use crate::summary::PeriodSummary;

/// Every derived figure of a [`PeriodSummary`], computed once.
///
/// This is what report assembly consumes. An absent CAGR is rendered as
/// `N/A`, never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// Period covered.
    pub period: Period,

    /// Period length in fractional years.
    pub years_in_period: f64,

    /// Number of beginning positions.
    pub beginning_position_count: usize,

    /// Number of ending positions.
    pub ending_position_count: usize,

    /// Aggregated beginning market value.
    pub beginning_market_value: Option<Decimal>,

    /// Aggregated ending market value.
    pub ending_market_value: Option<Decimal>,

    /// Aggregated beginning cost basis.
    pub beginning_total_basis: Option<Decimal>,

    /// Aggregated ending cost basis.
    pub ending_total_basis: Option<Decimal>,

    /// Ending less beginning market value.
    pub market_value_delta: Option<Decimal>,

    /// Ending less beginning cost basis.
    pub total_basis_delta: Option<Decimal>,

    /// Ending market value less ending basis.
    pub unrealized_gain: Option<Decimal>,

    /// Cumulative return over the period.
    pub single_period_return: Option<f64>,

    /// Compound annual growth rate.
    pub single_period_cagr: Option<f64>,

    /// Why `single_period_cagr` is absent, when it is.
    pub cagr_undefined: Option<CagrUndefined>,
}

impl PeriodReport {
    /// Evaluates a summary.
    #[must_use]
    pub fn from_summary(summary: &PeriodSummary) -> Self {
        let beginning_market_value = summary.beginning_market_value();
        let ending_market_value = summary.ending_market_value();
        let (single_period_cagr, cagr_undefined) = match summary.cagr_outcome() {
            Ok(rate) => (Some(rate), None),
            Err(reason) => (None, Some(reason)),
        };

        Self {
            period: *summary.period(),
            years_in_period: summary.years_in_period(),
            beginning_position_count: summary.beginning_positions().len(),
            ending_position_count: summary.ending_positions().len(),
            beginning_market_value,
            ending_market_value,
            beginning_total_basis: summary.beginning_total_basis(),
            ending_total_basis: summary.ending_total_basis(),
            market_value_delta: summary.market_value_delta(),
            total_basis_delta: summary.total_basis_delta(),
            unrealized_gain: summary.unrealized_gain(),
            single_period_return: summary.single_period_return(),
            single_period_cagr,
            cagr_undefined,
        }
    }

    /// CAGR as display text: a percentage with two decimals, or `N/A`.
    #[must_use]
    pub fn cagr_display(&self) -> String {
        format_rate(self.single_period_cagr)
    }
}

fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{:.2}%", r * 100.0),
        None => "N/A".to_string(),
    }
}

fn format_value(value: Option<Decimal>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for PeriodReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.3}y): {} -> {}, return {}, CAGR {}",
            self.period,
            self.years_in_period,
            format_value(self.beginning_market_value),
            format_value(self.ending_market_value),
            format_rate(self.single_period_return),
            self.cagr_display(),
        )
    }
}
