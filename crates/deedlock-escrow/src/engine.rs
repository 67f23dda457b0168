//! The settlement engine — the only writer of per-asset escrow state.
//!
//! Every operation takes an authenticated `caller` identity, validates the
//! caller's role and the current state, and only then mutates. The two
//! terminal transitions (`finalize_sale`, `cancel_sale`) move the asset
//! and the funds in the same step as the state-clearing writes: the
//! registry transfer, the only fallible external effect, is sequenced
//! after every precondition and before any local mutation, so a rejection
//! at any point leaves all state untouched.
//!
//! The engine assumes a host runtime that serializes operations (no
//! interleaving within a call); it holds no locks of its own.

use deedlock_registry::AssetRegistry;
use deedlock_types::{
    AccountId, AssetId, DeedlockError, Disposition, EscrowConfig, InspectionOutcome, Listing,
    Party, Result, SettlementPolicy, SettlementReceipt,
};
use rust_decimal::Decimal;

use crate::approvals::ApprovalTracker;
use crate::fund_custody::FundCustody;
use crate::inspection_log::InspectionLog;
use crate::listing_store::ListingStore;

/// Orchestrates listings, fund custody, approvals, and inspection records
/// into the escrow state machine:
///
/// ```text
/// Unlisted → Listed → (deposit / inspection / approvals, any order)
///          → Finalized | Cancelled → Unlisted
/// ```
pub struct SettlementEngine {
    config: EscrowConfig,
    listings: ListingStore,
    custody: FundCustody,
    approvals: ApprovalTracker,
    inspections: InspectionLog,
    /// Monotonic sequence for deterministic receipt ids.
    settlement_seq: u64,
}

impl SettlementEngine {
    /// Create an engine for the given construction-time identities.
    #[must_use]
    pub fn new(config: EscrowConfig) -> Self {
        Self {
            config,
            listings: ListingStore::new(),
            custody: FundCustody::new(),
            approvals: ApprovalTracker::new(),
            inspections: InspectionLog::new(),
            settlement_seq: 0,
        }
    }

    // =====================================================================
    // State-mutating operations
    // =====================================================================

    /// List an asset for sale and take custody of it.
    ///
    /// The caller must be the registry's current holder and must have
    /// authorized the escrow custodian beforehand; the asset moves into
    /// escrow custody in the same step the listing is recorded.
    ///
    /// # Errors
    /// - `NonPositiveAmount` if the price or earnest amount is not positive
    /// - `UnknownAsset` if the registry has no such asset
    /// - `NotOwner` if the caller does not hold the asset
    /// - `AlreadyListed` if a live listing exists
    /// - registry errors if the custody transfer is not authorized
    pub fn list<R: AssetRegistry>(
        &mut self,
        registry: &mut R,
        caller: AccountId,
        asset_id: AssetId,
        buyer: AccountId,
        purchase_price: Decimal,
        earnest_amount: Decimal,
    ) -> Result<()> {
        Self::ensure_positive("purchase price", purchase_price)?;
        Self::ensure_positive("earnest amount", earnest_amount)?;
        let holder = registry
            .holder(asset_id)
            .ok_or(DeedlockError::UnknownAsset(asset_id))?;
        if holder != caller {
            return Err(DeedlockError::NotOwner { asset_id, holder });
        }
        if self.listings.is_listed(asset_id) {
            return Err(DeedlockError::AlreadyListed(asset_id));
        }

        // Custody transfer is the only fallible effect; local records are
        // written only once it has succeeded.
        registry.transfer(self.config.custodian, caller, self.config.custodian, asset_id)?;

        self.listings
            .insert(asset_id, Listing::new(caller, buyer, purchase_price, earnest_amount))?;
        self.approvals.init(asset_id);

        tracing::info!(
            %asset_id,
            seller = %caller,
            %buyer,
            price = %purchase_price,
            earnest = %earnest_amount,
            "Asset listed, custody taken"
        );
        Ok(())
    }

    /// Deposit the buyer's earnest money against a listed asset.
    ///
    /// Under-funding is rejected outright; overpayment is accepted and
    /// counted toward the purchase price.
    ///
    /// # Errors
    /// - `NotListed` if no live listing exists
    /// - `Unauthorized` if the caller is not the designated buyer
    /// - `NonPositiveAmount` if `amount` is zero or negative
    /// - `InsufficientPayment` if `amount` is below the earnest amount
    pub fn deposit_earnest(
        &mut self,
        caller: AccountId,
        asset_id: AssetId,
        amount: Decimal,
    ) -> Result<()> {
        Self::ensure_positive("earnest deposit", amount)?;
        let listing = self.listings.get(asset_id)?;
        if caller != listing.buyer {
            return Err(DeedlockError::Unauthorized {
                operation: "deposit_earnest",
                required: "designated buyer",
            });
        }
        if amount < listing.earnest_amount {
            return Err(DeedlockError::InsufficientPayment {
                required: listing.earnest_amount,
                offered: amount,
            });
        }

        self.custody.credit(asset_id, amount);
        tracing::info!(%asset_id, buyer = %caller, %amount, "Earnest deposited");
        Ok(())
    }

    /// Credit additional funds toward a listed asset's purchase price.
    ///
    /// Open to any caller — this is how the financier tops the balance
    /// up to the purchase price before finalization.
    ///
    /// # Errors
    /// - `NonPositiveAmount` if `amount` is zero or negative
    /// - `NotListed` if no live listing exists
    pub fn fund_remainder(
        &mut self,
        caller: AccountId,
        asset_id: AssetId,
        amount: Decimal,
    ) -> Result<()> {
        Self::ensure_positive("remainder funding", amount)?;
        self.listings.get(asset_id)?;
        self.custody.credit(asset_id, amount);
        tracing::info!(%asset_id, from = %caller, %amount, "Sale funded");
        Ok(())
    }

    /// Record the inspection outcome for an asset.
    ///
    /// Only the configured inspector may call this. It may be called any
    /// number of times, before or after deposits and approvals; the last
    /// write wins until finalize/cancel consumes the record.
    ///
    /// # Errors
    /// Returns `Unauthorized` if the caller is not the inspector.
    pub fn update_inspection(
        &mut self,
        caller: AccountId,
        asset_id: AssetId,
        passed: bool,
    ) -> Result<()> {
        if caller != self.config.inspector {
            return Err(DeedlockError::Unauthorized {
                operation: "update_inspection",
                required: "inspection authority",
            });
        }
        let outcome = InspectionOutcome::from_passed(passed);
        self.inspections.record(asset_id, outcome);
        tracing::info!(%asset_id, %outcome, "Inspection recorded");
        Ok(())
    }

    /// Record the caller's consent to finalize the sale. Idempotent.
    ///
    /// # Errors
    /// - `NotListed` if no live listing exists
    /// - `Unauthorized` if the caller is none of buyer/seller/financier
    pub fn approve_sale(&mut self, caller: AccountId, asset_id: AssetId) -> Result<()> {
        let listing = self.listings.get(asset_id)?;
        let party = self
            .party_of(listing, caller)
            .ok_or(DeedlockError::Unauthorized {
                operation: "approve_sale",
                required: "buyer, seller, or financier",
            })?;

        self.approvals.grant(asset_id, party);
        tracing::info!(%asset_id, %party, "Sale approved");
        Ok(())
    }

    /// Complete the sale: asset to buyer, funds to seller, records cleared.
    ///
    /// All three gates must hold simultaneously — inspection passed, all
    /// approvals given, and funds attributed to *this* asset at least the
    /// purchase price. The funding gate is per-asset, not contract-wide:
    /// another sale's deposit must never satisfy this one. The full
    /// attributed deposit (overpayment included) sweeps to the seller.
    ///
    /// # Errors
    /// - `NotListed` if no live listing exists
    /// - `Unauthorized` if the caller is not admitted by the settlement policy
    /// - `InspectionNotPassed`, `ApprovalsIncomplete`, or `InsufficientFunds`
    ///   naming the unmet gate; no partial effect occurs
    pub fn finalize_sale<R: AssetRegistry>(
        &mut self,
        registry: &mut R,
        caller: AccountId,
        asset_id: AssetId,
    ) -> Result<SettlementReceipt> {
        let listing = self.listings.get(asset_id)?;
        let (seller, buyer) = (listing.seller, listing.buyer);
        let price = listing.purchase_price;
        self.check_settlement_caller(listing, caller, "finalize_sale")?;

        if !self.inspections.get(asset_id).is_passed() {
            return Err(DeedlockError::InspectionNotPassed(asset_id));
        }
        let approvals = self.approvals.get(asset_id);
        if !approvals.is_complete() {
            return Err(DeedlockError::ApprovalsIncomplete {
                asset_id,
                missing: approvals.missing(),
            });
        }
        let attributed = self.custody.deposited(asset_id);
        if attributed < price {
            return Err(DeedlockError::InsufficientFunds {
                needed: price,
                available: attributed,
            });
        }

        // Point of no return: custody moves to the buyer, then the local
        // payout and record clearing are infallible.
        registry.transfer(self.config.custodian, self.config.custodian, buyer, asset_id)?;

        let amount = self.custody.drain(asset_id);
        self.listings.remove(asset_id)?;
        self.approvals.clear(asset_id);
        self.inspections.clear(asset_id);

        let receipt = self.issue_receipt(asset_id, Disposition::Finalized, amount, seller);
        tracing::info!(
            %asset_id,
            %buyer,
            %seller,
            payout = %amount,
            receipt = receipt.id.short(),
            "Sale finalized"
        );
        Ok(receipt)
    }

    /// Cancel a pending sale and pay out the attributed deposit.
    ///
    /// Payout policy: a passing inspection means the buyer walked away
    /// from a completable sale, so the deposit is forfeited to the seller;
    /// a failed or unrecorded inspection refunds the buyer. The asset
    /// stays in escrow custody — returning it to the seller or re-listing
    /// is a separate operation.
    ///
    /// # Errors
    /// - `NotListed` if no live listing exists
    /// - `Unauthorized` if the caller is not admitted by the settlement policy
    pub fn cancel_sale(&mut self, caller: AccountId, asset_id: AssetId) -> Result<SettlementReceipt> {
        let listing = self.listings.get(asset_id)?;
        let (seller, buyer) = (listing.seller, listing.buyer);
        self.check_settlement_caller(listing, caller, "cancel_sale")?;

        let (disposition, payee) = if self.inspections.get(asset_id).is_passed() {
            (Disposition::Forfeited, seller)
        } else {
            (Disposition::Refunded, buyer)
        };

        let amount = self.custody.drain(asset_id);
        self.listings.remove(asset_id)?;
        self.approvals.clear(asset_id);
        self.inspections.clear(asset_id);

        let receipt = self.issue_receipt(asset_id, disposition, amount, payee);
        tracing::warn!(
            %asset_id,
            %payee,
            payout = %amount,
            disposition = ?disposition,
            receipt = receipt.id.short(),
            "Sale cancelled"
        );
        Ok(receipt)
    }

    // =====================================================================
    // Read-only queries
    // =====================================================================

    /// Whether a live listing exists for this asset.
    #[must_use]
    pub fn is_listed(&self, asset_id: AssetId) -> bool {
        self.listings.is_listed(asset_id)
    }

    /// The sale terms for a listed asset.
    #[must_use]
    pub fn listing(&self, asset_id: AssetId) -> Option<&Listing> {
        self.listings.get(asset_id).ok()
    }

    #[must_use]
    pub fn purchase_price(&self, asset_id: AssetId) -> Option<Decimal> {
        self.listing(asset_id).map(|l| l.purchase_price)
    }

    #[must_use]
    pub fn earnest_amount(&self, asset_id: AssetId) -> Option<Decimal> {
        self.listing(asset_id).map(|l| l.earnest_amount)
    }

    #[must_use]
    pub fn buyer(&self, asset_id: AssetId) -> Option<AccountId> {
        self.listing(asset_id).map(|l| l.buyer)
    }

    /// Whether the given party has approved this sale.
    #[must_use]
    pub fn approval(&self, asset_id: AssetId, party: Party) -> bool {
        self.approvals.get(asset_id).approved(party)
    }

    /// The recorded inspection outcome (`Unset` if never recorded).
    #[must_use]
    pub fn inspection(&self, asset_id: AssetId) -> InspectionOutcome {
        self.inspections.get(asset_id)
    }

    /// The contract-wide balance held by the escrow.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.custody.balance()
    }

    /// Cumulative funds attributed to this asset's sale.
    #[must_use]
    pub fn deposited(&self, asset_id: AssetId) -> Decimal {
        self.custody.deposited(asset_id)
    }

    #[must_use]
    pub fn config(&self) -> &EscrowConfig {
        &self.config
    }

    // =====================================================================
    // Internals
    // =====================================================================

    /// Reject zero and negative amounts before they touch the ledger.
    fn ensure_positive(context: &'static str, amount: Decimal) -> Result<()> {
        if amount > Decimal::ZERO {
            Ok(())
        } else {
            Err(DeedlockError::NonPositiveAmount { context, amount })
        }
    }

    /// Map a caller to its approval-gating role for this listing.
    fn party_of(&self, listing: &Listing, caller: AccountId) -> Option<Party> {
        if caller == listing.buyer {
            Some(Party::Buyer)
        } else if caller == listing.seller {
            Some(Party::Seller)
        } else if caller == self.config.financier {
            Some(Party::Financier)
        } else {
            None
        }
    }

    /// Enforce the configured settlement policy for terminal transitions.
    fn check_settlement_caller(
        &self,
        listing: &Listing,
        caller: AccountId,
        operation: &'static str,
    ) -> Result<()> {
        let admitted = match self.config.settlement_policy {
            SettlementPolicy::SellerOnly => caller == listing.seller,
            SettlementPolicy::AnyApprover => self.party_of(listing, caller).is_some(),
        };
        if admitted {
            Ok(())
        } else {
            Err(DeedlockError::Unauthorized {
                operation,
                required: "seller (or approver, per settlement policy)",
            })
        }
    }

    fn issue_receipt(
        &mut self,
        asset_id: AssetId,
        disposition: Disposition,
        amount: Decimal,
        payee: AccountId,
    ) -> SettlementReceipt {
        let seq = self.settlement_seq;
        self.settlement_seq += 1;
        SettlementReceipt::new(asset_id, seq, disposition, amount, payee)
    }
}
