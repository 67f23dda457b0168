//! The approval-gating roles of a pending sale.
//!
//! The inspector is deliberately absent: it records the inspection outcome
//! but holds no approval entry, so it lives in [`crate::EscrowConfig`]
//! rather than here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three parties whose consent gates finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    Buyer,
    Seller,
    Financier,
}

impl Party {
    /// All three parties, in the order approvals are conventionally checked.
    pub const ALL: [Party; 3] = [Party::Buyer, Party::Seller, Party::Financier];
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Buyer => write!(f, "buyer"),
            Party::Seller => write!(f, "seller"),
            Party::Financier => write!(f, "financier"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Party::Buyer.to_string(), "buyer");
        assert_eq!(Party::Seller.to_string(), "seller");
        assert_eq!(Party::Financier.to_string(), "financier");
    }

    #[test]
    fn all_has_three_distinct_parties() {
        assert_eq!(Party::ALL.len(), 3);
        assert_ne!(Party::ALL[0], Party::ALL[1]);
        assert_ne!(Party::ALL[1], Party::ALL[2]);
    }
}
