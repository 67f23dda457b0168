//! Configuration for a Deedlock escrow instance.

use serde::{Deserialize, Serialize};

use crate::AccountId;

/// Who may trigger the terminal transitions (`finalize_sale`,
/// `cancel_sale`).
///
/// The default is seller-only: it prevents the buyer or a third party
/// from forcing early settlement. `AnyApprover` widens it to the three
/// approval-gating parties of the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementPolicy {
    #[default]
    SellerOnly,
    AnyApprover,
}

/// Construction-time identities and policy for one escrow instance.
///
/// The inspector and financier are global, not per-listing: every sale
/// handled by this escrow shares the same inspection authority and the
/// same financing party, mirroring a single-lender deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowConfig {
    /// The escrow's own account: registry custody is transferred here
    /// while a sale is pending.
    pub custodian: AccountId,
    /// The only account allowed to record inspection outcomes.
    pub inspector: AccountId,
    /// The third approval-gating party alongside buyer and seller.
    pub financier: AccountId,
    /// Who may call `finalize_sale` / `cancel_sale`.
    pub settlement_policy: SettlementPolicy,
}

impl EscrowConfig {
    #[must_use]
    pub fn new(custodian: AccountId, inspector: AccountId, financier: AccountId) -> Self {
        Self {
            custodian,
            inspector,
            financier,
            settlement_policy: SettlementPolicy::default(),
        }
    }

    /// Override the settlement policy.
    #[must_use]
    pub fn with_settlement_policy(mut self, policy: SettlementPolicy) -> Self {
        self.settlement_policy = policy;
        self
    }
}
