//! Batch evaluation of independent periods.

use crate::config::SummaryConfig;
use crate::parallel::maybe_parallel_map;
use crate::report::PeriodReport;
use crate::summary::PeriodSummary;

/// Evaluates each summary into a report, in input order.
///
/// Summaries share nothing, so with the `parallel` feature and enough items
/// they are evaluated on the rayon pool. The periods are not chained or
/// combined; each report stands alone.
///
/// # Example
///
/// ```rust
/// use worthline_core::types::Period;
/// use worthline_performance::{summarize_periods, PeriodSummary, SummaryConfig};
///
/// let period = Period::parse("2020-01-01T00:00:00Z", "2021-01-01T00:00:00Z").unwrap();
/// let reports = summarize_periods(&[PeriodSummary::new(period)], &SummaryConfig::default());
/// assert_eq!(reports.len(), 1);
/// assert_eq!(reports[0].cagr_display(), "N/A");
/// ```
pub fn summarize_periods(summaries: &[PeriodSummary], config: &SummaryConfig) -> Vec<PeriodReport> {
    tracing::debug!(
        count = summaries.len(),
        parallel = config.should_parallelize(summaries.len()),
        "summarizing periods"
    );
    maybe_parallel_map(summaries, config, PeriodSummary::report)
}
