//! Position aggregation.
//!
//! Sums one decimal field across the positions of a period endpoint. An empty
//! collection is reported as [`PositionTotal::NoPositions`], never as a zero
//! sum: "no data" and "worth nothing" are different states and downstream
//! rules treat them separately.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use worthline_core::types::ValuationPosition;

/// Result of summing a field across a position collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PositionTotal {
    /// The collection was empty.
    NoPositions,
    /// The sum did not fit in a `Decimal`.
    Overflow,
    /// Sum of the field over at least one position. May be zero or negative.
    Total(Decimal),
}

impl PositionTotal {
    /// The sum, if one was computed.
    #[must_use]
    pub fn value(self) -> Option<Decimal> {
        match self {
            PositionTotal::Total(v) => Some(v),
            PositionTotal::NoPositions | PositionTotal::Overflow => None,
        }
    }

    /// True when no positions were supplied.
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, PositionTotal::NoPositions)
    }
}

/// Sums `field` over `positions` in iteration order.
///
/// # Example
///
/// ```rust
/// use worthline_core::types::ValuationPosition;
/// use worthline_performance::aggregation::{aggregate_by, PositionTotal};
/// use rust_decimal_macros::dec;
///
/// let positions = [
///     ValuationPosition::new("X", "1", "Bond", dec!(1), dec!(13)),
///     ValuationPosition::new("X", "1", "Stock", dec!(2), dec!(-13)),
/// ];
/// let total = aggregate_by(&positions, ValuationPosition::market_value);
/// assert_eq!(total, PositionTotal::Total(dec!(0)));
/// assert_eq!(aggregate_by(&[], ValuationPosition::market_value), PositionTotal::NoPositions);
/// ```
pub fn aggregate_by<F>(positions: &[ValuationPosition], field: F) -> PositionTotal
where
    F: Fn(&ValuationPosition) -> Decimal,
{
    if positions.is_empty() {
        return PositionTotal::NoPositions;
    }

    let total = positions
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(field(p)));

    match total {
        Some(sum) => {
            tracing::trace!(count = positions.len(), %sum, "aggregated positions");
            PositionTotal::Total(sum)
        }
        None => {
            tracing::debug!(count = positions.len(), "position total overflowed");
            PositionTotal::Overflow
        }
    }
}

/// Sum of market values.
pub fn aggregate_market_value(positions: &[ValuationPosition]) -> PositionTotal {
    aggregate_by(positions, ValuationPosition::market_value)
}

/// Sum of total cost basis.
pub fn aggregate_total_basis(positions: &[ValuationPosition]) -> PositionTotal {
    aggregate_by(positions, ValuationPosition::total_basis)
}
