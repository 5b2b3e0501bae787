//! Valuation position: one holding's value within one snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One position's value within one valuation snapshot.
///
/// Identifiers are opaque and never interpreted by the analytics. Basis and
/// market value are independently signed; zero and negative amounts are valid
/// here and are rejected, where it matters, by the computations that consume
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValuationPosition {
    snapshot_id: String,
    account_id: String,
    asset_id: String,
    total_basis: Decimal,
    market_value: Decimal,
}

impl ValuationPosition {
    /// Creates a position. Identifiers are taken as-is, blank ones included.
    #[must_use]
    pub fn new(
        snapshot_id: impl Into<String>,
        account_id: impl Into<String>,
        asset_id: impl Into<String>,
        total_basis: Decimal,
        market_value: Decimal,
    ) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            account_id: account_id.into(),
            asset_id: asset_id.into(),
            total_basis,
            market_value,
        }
    }

    /// Snapshot this valuation belongs to.
    #[must_use]
    pub fn snapshot_id(&self) -> &str {
        &self.snapshot_id
    }

    /// Owning account.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Held asset.
    #[must_use]
    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    /// Total cost basis.
    #[must_use]
    pub fn total_basis(&self) -> Decimal {
        self.total_basis
    }

    /// Market value at the snapshot.
    #[must_use]
    pub fn market_value(&self) -> Decimal {
        self.market_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_accepts_any_sign() {
        let pos = ValuationPosition::new("X", "1", "Bond", dec!(1), dec!(-13));
        assert_eq!(pos.market_value(), dec!(-13));
        assert_eq!(pos.total_basis(), dec!(1));
    }

    #[test]
    fn test_serde() {
        let pos = ValuationPosition::new("X", "1", "Bond", dec!(1), dec!(16));
        let json = serde_json::to_string(&pos).unwrap();
        let back: ValuationPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pos);
    }
}
