//! Conditional parallel iteration for batch period evaluation.
//!
//! `summarize_periods` turns each independent `PeriodSummary` into a report
//! through this helper. Rayon is used when the `parallel` feature is enabled
//! and `SummaryConfig::should_parallelize` accepts the batch size; otherwise
//! the summaries are evaluated in order on the calling thread.

use crate::config::SummaryConfig;

/// Maps `f` over a batch, in parallel when `config` allows it for the batch size.
///
/// Output order always matches input order, so report `i` belongs to
/// summary `i` regardless of how the batch was scheduled.
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &SummaryConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}
