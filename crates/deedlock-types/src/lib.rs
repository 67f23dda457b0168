//! # deedlock-types
//!
//! Shared types, errors, and configuration for the **Deedlock** escrow
//! settlement engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AssetId`], [`AccountId`], [`ReceiptId`]
//! - **Sale model**: [`Listing`], [`Party`], [`ApprovalSet`], [`InspectionOutcome`]
//! - **Receipt model**: [`SettlementReceipt`], [`Disposition`]
//! - **Configuration**: [`EscrowConfig`], [`SettlementPolicy`]
//! - **Errors**: [`DeedlockError`] with `DL_ERR_` prefix codes

pub mod approval;
pub mod config;
pub mod error;
pub mod ids;
pub mod inspection;
pub mod listing;
pub mod party;
pub mod receipt;

// Re-export all primary types at crate root for ergonomic imports:
//   use deedlock_types::{Listing, Party, SettlementReceipt, ...};

pub use approval::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use inspection::*;
pub use listing::*;
pub use party::*;
pub use receipt::*;
