//! The per-asset sale terms recorded at listing time.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AccountId;

/// Sale terms for one listed asset.
///
/// A `Listing` is immutable once created: the existence of the record *is*
/// the listed flag, and the record is destroyed (not edited) when the sale
/// finalizes or cancels. While a listing exists, custody of the asset sits
/// with the escrow in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// The account that listed the asset and receives the sale proceeds.
    pub seller: AccountId,
    /// The designated buyer; the only account allowed to deposit earnest.
    pub buyer: AccountId,
    /// Full sale price the escrow must hold before finalization.
    pub purchase_price: Decimal,
    /// Minimum deposit required from the buyer to activate the sale.
    pub earnest_amount: Decimal,
    /// When the listing was recorded.
    pub listed_at: DateTime<Utc>,
}

impl Listing {
    #[must_use]
    pub fn new(
        seller: AccountId,
        buyer: AccountId,
        purchase_price: Decimal,
        earnest_amount: Decimal,
    ) -> Self {
        Self {
            seller,
            buyer,
            purchase_price,
            earnest_amount,
            listed_at: Utc::now(),
        }
    }
}
