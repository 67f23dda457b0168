//! Approval tracking across listings.

use std::collections::HashMap;

use deedlock_types::{ApprovalSet, AssetId, Party};

/// Per-asset [`ApprovalSet`]s, created empty at listing time and
/// destroyed on finalize/cancel.
#[derive(Debug, Default)]
pub struct ApprovalTracker {
    approvals: HashMap<AssetId, ApprovalSet>,
}

impl ApprovalTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize an empty approval set for a fresh listing.
    pub fn init(&mut self, asset_id: AssetId) {
        self.approvals.insert(asset_id, ApprovalSet::new());
    }

    /// Record `party`'s consent. Idempotent.
    pub fn grant(&mut self, asset_id: AssetId, party: Party) {
        self.approvals.entry(asset_id).or_default().grant(party);
    }

    /// The current approval set for an asset (empty if never listed).
    #[must_use]
    pub fn get(&self, asset_id: AssetId) -> ApprovalSet {
        self.approvals.get(&asset_id).copied().unwrap_or_default()
    }

    /// Drop the approval set (terminal transition).
    pub fn clear(&mut self, asset_id: AssetId) {
        self.approvals.remove(&asset_id);
    }
}
