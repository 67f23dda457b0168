//! Listing storage.
//!
//! One [`Listing`] per live asset-id. Existence of the record is the
//! listed flag: inserting enforces `AlreadyListed`, removal on
//! finalize/cancel makes the asset-id eligible for re-listing.

use std::collections::HashMap;

use deedlock_types::{AssetId, DeedlockError, Listing, Result};

/// Per-asset records of sale terms.
#[derive(Debug, Default)]
pub struct ListingStore {
    listings: HashMap<AssetId, Listing>,
}

impl ListingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new listing.
    ///
    /// # Errors
    /// Returns `AlreadyListed` if a live listing exists for this asset.
    pub fn insert(&mut self, asset_id: AssetId, listing: Listing) -> Result<()> {
        if self.listings.contains_key(&asset_id) {
            return Err(DeedlockError::AlreadyListed(asset_id));
        }
        self.listings.insert(asset_id, listing);
        Ok(())
    }

    /// Look up the listing for an asset, rejecting unlisted ids.
    ///
    /// # Errors
    /// Returns `NotListed` if no live listing exists.
    pub fn get(&self, asset_id: AssetId) -> Result<&Listing> {
        self.listings
            .get(&asset_id)
            .ok_or(DeedlockError::NotListed(asset_id))
    }

    /// Remove and return the listing (terminal transition).
    ///
    /// # Errors
    /// Returns `NotListed` if no live listing exists.
    pub fn remove(&mut self, asset_id: AssetId) -> Result<Listing> {
        self.listings
            .remove(&asset_id)
            .ok_or(DeedlockError::NotListed(asset_id))
    }

    /// Whether a live listing exists for this asset.
    #[must_use]
    pub fn is_listed(&self, asset_id: AssetId) -> bool {
        self.listings.contains_key(&asset_id)
    }

    /// Number of live listings.
    #[must_use]
    pub fn count(&self) -> usize {
        self.listings.len()
    }
}
