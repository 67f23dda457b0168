//! # deedlock-escrow
//!
//! The escrow core: custody of a tokenized property record and the
//! buyer's committed funds until agreed conditions are met, with an
//! atomic finalize/cancel transition.
//!
//! ## Architecture
//!
//! 1. **ListingStore**: per-asset sale terms; record existence is the
//!    listed flag
//! 2. **FundCustody**: contract-wide balance with per-asset attribution
//! 3. **ApprovalTracker**: buyer/seller/financier sign-off per asset
//! 4. **InspectionLog**: the inspector's pass/fail verdict per asset
//! 5. **SettlementEngine**: the only writer — validates caller and state,
//!    then mutates; terminal transitions move asset and funds together
//!
//! ## Sale flow
//!
//! ```text
//! list() → deposit_earnest() / update_inspection() / approve_sale()×3
//!        → fund_remainder() → finalize_sale() | cancel_sale()
//! ```
//!
//! The registry collaborator is consumed through the
//! [`deedlock_registry::AssetRegistry`] trait; the engine never owns the
//! asset-id → holder mapping.

pub mod approvals;
pub mod engine;
pub mod fund_custody;
pub mod inspection_log;
pub mod listing_store;

pub use approvals::ApprovalTracker;
pub use engine::SettlementEngine;
pub use fund_custody::FundCustody;
pub use inspection_log::InspectionLog;
pub use listing_store::ListingStore;
