//! Per-asset approval state for the three gating parties.

use serde::{Deserialize, Serialize};

use crate::Party;

/// The consent record for one pending sale: one entry per [`Party`],
/// all false at listing time. Entries only ever flip false → true;
/// there is no revocation short of cancelling the sale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalSet {
    buyer: bool,
    seller: bool,
    financier: bool,
}

impl ApprovalSet {
    /// Create an approval set with no consents recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a party's consent. Idempotent: re-approving is a no-op.
    pub fn grant(&mut self, party: Party) {
        match party {
            Party::Buyer => self.buyer = true,
            Party::Seller => self.seller = true,
            Party::Financier => self.financier = true,
        }
    }

    /// Whether the given party has approved.
    #[must_use]
    pub fn approved(&self, party: Party) -> bool {
        match party {
            Party::Buyer => self.buyer,
            Party::Seller => self.seller,
            Party::Financier => self.financier,
        }
    }

    /// Whether all three parties have approved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.buyer && self.seller && self.financier
    }

    /// The parties that have not yet approved.
    #[must_use]
    pub fn missing(&self) -> Vec<Party> {
        Party::ALL
            .into_iter()
            .filter(|p| !self.approved(*p))
            .collect()
    }
}
