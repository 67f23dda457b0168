//! Fund custody ledger.
//!
//! Tracks the contract-wide balance held by the escrow and attributes
//! every inbound deposit to a specific asset-id's sale. All mutations are
//! atomic: either the full operation succeeds or the ledger is unchanged.
//!
//! Invariant: `sum(per-asset deposits) == total` — all inbound funds are
//! earmarked, so draining an asset's attribution drains the matching
//! share of the total.

use std::collections::HashMap;

use deedlock_types::AssetId;
use rust_decimal::Decimal;

/// Contract-wide balance plus per-asset deposit counters.
#[derive(Debug, Default)]
pub struct FundCustody {
    total: Decimal,
    deposits: HashMap<AssetId, Decimal>,
}

impl FundCustody {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` against `asset_id`'s sale.
    pub fn credit(&mut self, asset_id: AssetId, amount: Decimal) {
        *self.deposits.entry(asset_id).or_default() += amount;
        self.total += amount;
    }

    /// Remove and return the full amount attributed to `asset_id`,
    /// reducing the contract-wide balance by the same amount. Returns
    /// zero if nothing was deposited.
    ///
    /// Cannot underflow: `credit` is the only way funds enter either
    /// counter, so every attribution is covered by the total.
    pub fn drain(&mut self, asset_id: AssetId) -> Decimal {
        let amount = self.deposits.remove(&asset_id).unwrap_or_default();
        debug_assert!(amount <= self.total);
        self.total -= amount;
        amount
    }

    /// The contract-wide balance.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.total
    }

    /// Cumulative funds attributed to `asset_id`.
    #[must_use]
    pub fn deposited(&self, asset_id: AssetId) -> Decimal {
        self.deposits.get(&asset_id).copied().unwrap_or_default()
    }

    /// Verify the earmarking invariant.
    #[must_use]
    pub fn attributions_match_total(&self) -> bool {
        self.deposits.values().copied().sum::<Decimal>() == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_raises_both_counters() {
        let mut custody = FundCustody::new();
        custody.credit(AssetId(1), Decimal::new(5, 0));
        custody.credit(AssetId(1), Decimal::new(5, 0));
        assert_eq!(custody.balance(), Decimal::new(10, 0));
        assert_eq!(custody.deposited(AssetId(1)), Decimal::new(10, 0));
        assert!(custody.attributions_match_total());
    }

    #[test]
    fn attributions_are_per_asset() {
        let mut custody = FundCustody::new();
        custody.credit(AssetId(1), Decimal::new(5, 0));
        custody.credit(AssetId(2), Decimal::new(7, 0));
        assert_eq!(custody.deposited(AssetId(1)), Decimal::new(5, 0));
        assert_eq!(custody.deposited(AssetId(2)), Decimal::new(7, 0));
        assert_eq!(custody.balance(), Decimal::new(12, 0));
    }

    #[test]
    fn drain_empties_one_attribution() {
        let mut custody = FundCustody::new();
        custody.credit(AssetId(1), Decimal::new(5, 0));
        custody.credit(AssetId(2), Decimal::new(7, 0));

        let drained = custody.drain(AssetId(1));
        assert_eq!(drained, Decimal::new(5, 0));
        assert_eq!(custody.deposited(AssetId(1)), Decimal::ZERO);
        assert_eq!(custody.balance(), Decimal::new(7, 0));
        assert!(custody.attributions_match_total());
    }

    #[test]
    fn drain_without_deposit_is_zero() {
        let mut custody = FundCustody::new();
        assert_eq!(custody.drain(AssetId(1)), Decimal::ZERO);
        assert_eq!(custody.balance(), Decimal::ZERO);
    }
}
