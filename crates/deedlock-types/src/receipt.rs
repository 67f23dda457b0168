//! Settlement receipts.
//!
//! The escrow tracks fund attribution but never moves real money itself;
//! a receipt tells the host exactly which payout to execute. Receipts are
//! the audit trail of every terminal transition.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, AssetId, ReceiptId};

/// How a pending sale ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    /// Sale completed: asset to buyer, funds to seller.
    Finalized,
    /// Sale cancelled after a failed (or unrecorded) inspection:
    /// deposit returned to the buyer.
    Refunded,
    /// Sale cancelled after a passing inspection: deposit forfeited
    /// to the seller as a withdrawal penalty.
    Forfeited,
}

/// Record of a terminal settlement transition and its payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReceipt {
    pub id: ReceiptId,
    pub asset_id: AssetId,
    pub disposition: Disposition,
    /// Funds the host must pay out. Zero if nothing was deposited.
    pub amount: Decimal,
    /// Destination account for `amount`.
    pub payee: AccountId,
    pub issued_at: DateTime<Utc>,
}

impl SettlementReceipt {
    #[must_use]
    pub fn new(
        asset_id: AssetId,
        sequence: u64,
        disposition: Disposition,
        amount: Decimal,
        payee: AccountId,
    ) -> Self {
        Self {
            id: ReceiptId::deterministic(asset_id, sequence),
            asset_id,
            disposition,
            amount,
            payee,
            issued_at: Utc::now(),
        }
    }
}
