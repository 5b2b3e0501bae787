//! Integration tests for worthline-performance.
//!
//! Reference scenarios: single positions on each side over six-month and
//! multi-year periods, plus the degenerate inputs that must leave the CAGR
//! undefined.

use approx::assert_abs_diff_eq;
use worthline_performance::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

const ANCHOR: &str = "2020-06-01T12:00:00Z";
const SIX_MONTHS_LATER: &str = "2020-12-02T12:00:00Z";

fn six_months() -> Period {
    Period::parse(ANCHOR, SIX_MONTHS_LATER).unwrap()
}

fn position(asset: &str, market_value: Decimal) -> ValuationPosition {
    ValuationPosition::new("X", "1", asset, dec!(1), market_value)
}

fn zero_pos() -> ValuationPosition {
    position("Bond", dec!(0))
}

fn neg_pos() -> ValuationPosition {
    position("Bond", dec!(-13))
}

fn pos1() -> ValuationPosition {
    position("Bond", dec!(13))
}

fn pos2() -> ValuationPosition {
    position("Bond", dec!(16))
}

fn single(
    period: Period,
    beginning: ValuationPosition,
    ending: ValuationPosition,
) -> PeriodSummary {
    PeriodSummary::new(period)
        .with_beginning_positions([beginning])
        .with_ending_positions([ending])
}

fn span(start: &str, end: &str) -> Period {
    Period::parse(start, end).unwrap()
}

// =============================================================================
// UNDEFINED CAGR
// =============================================================================

#[test]
fn test_zero_duration_is_undefined() {
    let at = Period::parse(SIX_MONTHS_LATER, SIX_MONTHS_LATER).unwrap();
    let summary = PeriodSummary::new(at);
    assert_eq!(summary.years_in_period(), 0.0);
    assert_eq!(summary.single_period_cagr(), None);

    // positions do not rescue a zero-length period
    let with_positions = single(at, pos1(), pos2());
    assert_eq!(with_positions.single_period_cagr(), None);
    assert_eq!(with_positions.cagr_outcome(), Err(CagrUndefined::ZeroDuration));
}

#[test]
fn test_no_beginning_positions() {
    let summary = PeriodSummary::from_parts(six_months(), None, Some(vec![pos1()]));
    assert_eq!(summary.beginning_market_value(), None);
    assert_eq!(summary.single_period_cagr(), None);
}

#[test]
fn test_no_ending_positions() {
    let summary = PeriodSummary::from_parts(six_months(), Some(vec![pos1()]), None);
    assert_eq!(summary.ending_market_value(), None);
    assert_eq!(summary.single_period_cagr(), None);
}

#[test]
fn test_zero_beginning_value() {
    let summary = single(six_months(), zero_pos(), pos1());
    assert_eq!(summary.beginning_market_value(), Some(Decimal::ZERO));
    assert_eq!(summary.single_period_cagr(), None);
}

#[test]
fn test_zero_ending_value() {
    let summary = single(six_months(), pos1(), zero_pos());
    assert_eq!(summary.single_period_cagr(), None);
}

#[test]
fn test_negative_beginning_value() {
    let summary = single(six_months(), neg_pos(), pos1());
    assert_eq!(summary.single_period_cagr(), None);
}

#[test]
fn test_negative_ending_value() {
    let summary = single(six_months(), pos1(), neg_pos());
    assert_eq!(summary.single_period_cagr(), None);
}

// =============================================================================
// DEFINED CAGR
// =============================================================================

#[test]
fn test_no_change() {
    let summary = single(six_months(), pos1(), pos1());
    assert_eq!(summary.single_period_cagr(), Some(0.0));
}

#[test]
fn test_positive() {
    let summary = single(six_months(), pos1(), pos2());
    assert_abs_diff_eq!(summary.single_period_cagr().unwrap(), 0.510, epsilon = 0.001);
}

#[test]
fn test_negative() {
    let summary = single(six_months(), pos2(), pos1());
    assert_abs_diff_eq!(summary.single_period_cagr().unwrap(), -0.338, epsilon = 0.001);
}

#[test]
fn test_three_years_doubling_short() {
    let summary = single(
        span("2018-01-01T12:00:00Z", "2021-01-01T12:00:00Z"),
        position("Bond", dec!(10000)),
        position("Bond", dec!(19000)),
    );
    // not the 23.86% a whole-year approximation gives
    assert_abs_diff_eq!(summary.single_period_cagr().unwrap(), 0.2385, epsilon = 0.0001);
}

#[test]
fn test_three_years_large_cap() {
    let summary = single(
        span("2017-12-01T12:00:00Z", "2020-12-01T12:00:00Z"),
        position("LC", dec!(64900)),
        position("LC", dec!(176_000)),
    );
    assert_abs_diff_eq!(summary.single_period_cagr().unwrap(), 0.3944, epsilon = 0.0001);
}

#[test]
fn test_fractional_years() {
    let summary = single(
        span("2013-06-01T12:00:00Z", "2018-09-08T12:00:00Z"),
        position("LC", dec!(10000.00)),
        position("LC", dec!(16897.14)),
    );
    assert_abs_diff_eq!(summary.years_in_period(), 5.271, epsilon = 0.001);
    assert_abs_diff_eq!(summary.single_period_cagr().unwrap(), 0.1046, epsilon = 0.0001);
}

// =============================================================================
// MULTI-POSITION SNAPSHOTS
// =============================================================================

#[test]
fn test_positions_are_summed_before_growth() {
    let summary = PeriodSummary::new(six_months())
        .with_beginning_positions([position("Bond", dec!(6)), position("Stock", dec!(7))])
        .with_ending_positions([
            position("Bond", dec!(5)),
            position("Stock", dec!(9)),
            position("Cash", dec!(2)),
        ]);

    assert_eq!(summary.beginning_market_value(), Some(dec!(13)));
    assert_eq!(summary.ending_market_value(), Some(dec!(16)));

    let reference = single(six_months(), pos1(), pos2());
    assert_eq!(summary.single_period_cagr(), reference.single_period_cagr());
}

#[test]
fn test_negative_position_within_positive_total() {
    let summary = PeriodSummary::new(six_months())
        .with_beginning_positions([position("Bond", dec!(20)), position("Margin", dec!(-7))])
        .with_ending_positions([pos2()]);
    assert_eq!(summary.beginning_market_value(), Some(dec!(13)));
    assert_abs_diff_eq!(summary.single_period_cagr().unwrap(), 0.510, epsilon = 0.001);
}

#[test]
fn test_account_scoped_reports() {
    let period = six_months();
    let beginning = vec![
        ValuationPosition::new("S1", "IRA", "Bond", dec!(10), dec!(13)),
        ValuationPosition::new("S1", "Taxable", "LC", dec!(10), dec!(16)),
    ];
    let ending = vec![
        ValuationPosition::new("S2", "IRA", "Bond", dec!(10), dec!(16)),
        ValuationPosition::new("S2", "Taxable", "LC", dec!(10), dec!(13)),
        ValuationPosition::new("S2", "Roth", "LC", dec!(5), dec!(5)),
    ];
    let summary = PeriodSummary::from_parts(period, Some(beginning), Some(ending));

    let reports: Vec<PeriodReport> = summary
        .account_ids()
        .into_iter()
        .map(|account| summary.for_account(account).report())
        .collect();

    // IRA, Roth, Taxable
    assert_eq!(reports.len(), 3);
    assert_abs_diff_eq!(reports[0].single_period_cagr.unwrap(), 0.510, epsilon = 0.001);
    assert_eq!(reports[1].cagr_display(), "N/A");
    assert_eq!(reports[1].cagr_undefined, Some(CagrUndefined::MissingBeginning));
    assert_abs_diff_eq!(reports[2].single_period_cagr.unwrap(), -0.338, epsilon = 0.001);
}

// =============================================================================
// BATCH
// =============================================================================

#[test]
fn test_batch_of_reference_periods() {
    let summaries = vec![
        single(six_months(), pos1(), pos1()),
        single(six_months(), pos1(), pos2()),
        single(six_months(), pos2(), pos1()),
        PeriodSummary::new(six_months()),
    ];

    let reports = summarize_periods(&summaries, &SummaryConfig::default());
    let display: Vec<String> = reports.iter().map(PeriodReport::cagr_display).collect();
    assert_eq!(display, vec!["0.00%", "51.01%", "-33.78%", "N/A"]);
}
