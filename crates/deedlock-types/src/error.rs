//! Error types for the Deedlock escrow engine.
//!
//! All errors use the `DL_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Listing errors
//! - 2xx: Fund errors
//! - 3xx: Authorization errors
//! - 4xx: Settlement errors
//! - 5xx: Registry errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{AccountId, AssetId, Party};

/// Central error enum for all Deedlock operations.
///
/// Every rejection names the violated precondition so callers can
/// distinguish causes; no error is ever silently swallowed.
#[derive(Debug, Error)]
pub enum DeedlockError {
    // =================================================================
    // Listing Errors (1xx)
    // =================================================================
    /// The caller is not the current holder of the asset.
    #[error("DL_ERR_100: Not the owner of {asset_id}: held by {holder}")]
    NotOwner { asset_id: AssetId, holder: AccountId },

    /// A live listing already exists for this asset.
    #[error("DL_ERR_101: Already listed: {0}")]
    AlreadyListed(AssetId),

    /// No live listing exists for this asset.
    #[error("DL_ERR_102: Not listed: {0}")]
    NotListed(AssetId),

    // =================================================================
    // Fund Errors (2xx)
    // =================================================================
    /// The earnest deposit is below the listing's required amount.
    #[error("DL_ERR_200: Insufficient payment: required {required}, offered {offered}")]
    InsufficientPayment { required: Decimal, offered: Decimal },

    /// The escrow balance is below the purchase price at finalize.
    #[error("DL_ERR_201: Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Decimal, available: Decimal },

    /// A monetary amount that must be positive was zero or negative.
    #[error("DL_ERR_202: Non-positive amount for {context}: {amount}")]
    NonPositiveAmount {
        context: &'static str,
        amount: Decimal,
    },

    // =================================================================
    // Authorization Errors (3xx)
    // =================================================================
    /// The caller lacks the required role for the operation.
    #[error("DL_ERR_300: Unauthorized: {operation} requires {required}")]
    Unauthorized {
        operation: &'static str,
        required: &'static str,
    },

    // =================================================================
    // Settlement Errors (4xx)
    // =================================================================
    /// Finalize attempted before the inspection outcome is PASSED.
    #[error("DL_ERR_400: Inspection not passed for {0}")]
    InspectionNotPassed(AssetId),

    /// Finalize attempted with one or more approvals still outstanding.
    #[error("DL_ERR_401: Approvals incomplete for {asset_id}: missing {}", format_parties(.missing))]
    ApprovalsIncomplete {
        asset_id: AssetId,
        missing: Vec<Party>,
    },

    // =================================================================
    // Registry Errors (5xx)
    // =================================================================
    /// The asset id is not known to the registry.
    #[error("DL_ERR_500: Unknown asset: {0}")]
    UnknownAsset(AssetId),

    /// The caller is neither the holder nor an authorized custodian.
    #[error("DL_ERR_501: Transfer not authorized for {asset_id} by {caller}")]
    TransferNotAuthorized {
        asset_id: AssetId,
        caller: AccountId,
    },

    /// The transfer's `from` account does not match the current holder.
    #[error("DL_ERR_502: Wrong holder for {asset_id}: expected {expected}, actual {actual}")]
    WrongHolder {
        asset_id: AssetId,
        expected: AccountId,
        actual: AccountId,
    },
}

fn format_parties(parties: &[Party]) -> String {
    parties
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, DeedlockError>;
