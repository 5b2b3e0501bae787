//! Compound annual growth rate.
//!
//! $$\text{CAGR} = \left(\frac{V_{end}}{V_{begin}}\right)^{1/t} - 1$$
//!
//! where `t` is the period length in fractional years. The exponent is real
//! valued: periods shorter than a year raise the ratio to a power above one,
//! longer periods take a root. No whole-year rounding is applied.
//!
//! Degenerate inputs do not produce a number. [`evaluate_cagr`] says why in a
//! [`CagrUndefined`]; [`compound_annual_growth_rate`] collapses that to `None`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a growth rate has no defined value.
///
/// These are routine states of real portfolio data (an account opened
/// mid-period has no beginning positions), not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CagrUndefined {
    /// The period has zero length.
    ZeroDuration,
    /// The period length is negative or not finite.
    InvalidDuration,
    /// No beginning value.
    MissingBeginning,
    /// No ending value.
    MissingEnding,
    /// Beginning value is zero or negative.
    NonPositiveBeginning,
    /// Ending value is zero or negative.
    NonPositiveEnding,
    /// The ratio or the annualized result is outside `f64` range.
    OutOfRange,
}

impl CagrUndefined {
    /// Short human-readable explanation.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            CagrUndefined::ZeroDuration => "zero-length period",
            CagrUndefined::InvalidDuration => "invalid period length",
            CagrUndefined::MissingBeginning => "no beginning positions",
            CagrUndefined::MissingEnding => "no ending positions",
            CagrUndefined::NonPositiveBeginning => "beginning value is not positive",
            CagrUndefined::NonPositiveEnding => "ending value is not positive",
            CagrUndefined::OutOfRange => "result out of range",
        }
    }
}

impl fmt::Display for CagrUndefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Ratio `ending / beginning` after the value checks.
///
/// The division happens in `Decimal`, so equal values give exactly `1.0`.
pub fn growth_ratio(
    beginning: Option<Decimal>,
    ending: Option<Decimal>,
) -> Result<f64, CagrUndefined> {
    let beginning = beginning.ok_or(CagrUndefined::MissingBeginning)?;
    let ending = ending.ok_or(CagrUndefined::MissingEnding)?;

    if beginning <= Decimal::ZERO {
        return Err(CagrUndefined::NonPositiveBeginning);
    }
    if ending <= Decimal::ZERO {
        return Err(CagrUndefined::NonPositiveEnding);
    }

    let ratio = ending
        .checked_div(beginning)
        .and_then(|r| r.to_f64())
        .ok_or(CagrUndefined::OutOfRange)?;

    // a positive quotient can still round to zero at Decimal's scale limit
    if ratio > 0.0 && ratio.is_finite() {
        Ok(ratio)
    } else {
        Err(CagrUndefined::OutOfRange)
    }
}

/// Evaluates the CAGR, reporting why it is undefined when it is.
///
/// Checks run in this order: duration, beginning presence, ending presence,
/// beginning sign, ending sign.
///
/// # Example
///
/// ```rust
/// use worthline_performance::cagr::{evaluate_cagr, CagrUndefined};
/// use rust_decimal_macros::dec;
///
/// let rate = evaluate_cagr(Some(dec!(10000)), Some(dec!(19000)), 3.0).unwrap();
/// assert!((rate - 0.2386).abs() < 1e-4);
///
/// assert_eq!(
///     evaluate_cagr(None, Some(dec!(19000)), 3.0),
///     Err(CagrUndefined::MissingBeginning)
/// );
/// ```
pub fn evaluate_cagr(
    beginning: Option<Decimal>,
    ending: Option<Decimal>,
    years: f64,
) -> Result<f64, CagrUndefined> {
    if years == 0.0 {
        return Err(CagrUndefined::ZeroDuration);
    }
    if !years.is_finite() || years < 0.0 {
        return Err(CagrUndefined::InvalidDuration);
    }

    let ratio = growth_ratio(beginning, ending)?;
    let rate = ratio.powf(years.recip()) - 1.0;

    if rate.is_finite() {
        Ok(rate)
    } else {
        Err(CagrUndefined::OutOfRange)
    }
}

/// CAGR, or `None` when it has no defined value.
pub fn compound_annual_growth_rate(
    beginning: Option<Decimal>,
    ending: Option<Decimal>,
    years: f64,
) -> Option<f64> {
    evaluate_cagr(beginning, ending, years).ok()
}

/// Cumulative (non-annualized) return, `ending / beginning - 1`.
///
/// Same value rules as the CAGR; the period length plays no part.
pub fn evaluate_period_return(
    beginning: Option<Decimal>,
    ending: Option<Decimal>,
) -> Result<f64, CagrUndefined> {
    growth_ratio(beginning, ending).map(|ratio| ratio - 1.0)
}
