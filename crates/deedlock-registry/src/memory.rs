//! In-memory asset registry.
//!
//! Reference implementation of [`AssetRegistry`] backed by two maps:
//! holders and outstanding transfer authorizations. Used by the test
//! suites and by embedders that keep the whole system in-process.

use std::collections::HashMap;

use deedlock_types::{AccountId, AssetId, DeedlockError, Result};

use crate::AssetRegistry;

/// HashMap-backed registry with monotonically increasing asset ids.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    /// asset-id → current holder.
    holders: HashMap<AssetId, AccountId>,
    /// asset-id → custodian authorized to transfer it.
    authorizations: HashMap<AssetId, AccountId>,
    /// Next asset id to mint.
    next_id: u64,
}

impl InMemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new asset held by `holder` and return its id.
    pub fn mint(&mut self, holder: AccountId) -> AssetId {
        self.next_id += 1;
        let asset_id = AssetId(self.next_id);
        self.holders.insert(asset_id, holder);
        tracing::debug!(%asset_id, %holder, "minted asset");
        asset_id
    }

    /// Number of assets tracked.
    #[must_use]
    pub fn count(&self) -> usize {
        self.holders.len()
    }
}

impl AssetRegistry for InMemoryRegistry {
    fn holder(&self, asset_id: AssetId) -> Option<AccountId> {
        self.holders.get(&asset_id).copied()
    }

    fn authorize_transfer(
        &mut self,
        caller: AccountId,
        asset_id: AssetId,
        custodian: AccountId,
    ) -> Result<()> {
        let holder = self
            .holders
            .get(&asset_id)
            .copied()
            .ok_or(DeedlockError::UnknownAsset(asset_id))?;
        if caller != holder {
            return Err(DeedlockError::TransferNotAuthorized { asset_id, caller });
        }
        self.authorizations.insert(asset_id, custodian);
        Ok(())
    }

    fn transfer(
        &mut self,
        caller: AccountId,
        from: AccountId,
        to: AccountId,
        asset_id: AssetId,
    ) -> Result<()> {
        let holder = self
            .holders
            .get(&asset_id)
            .copied()
            .ok_or(DeedlockError::UnknownAsset(asset_id))?;
        if from != holder {
            return Err(DeedlockError::WrongHolder {
                asset_id,
                expected: from,
                actual: holder,
            });
        }
        let authorized = self.authorizations.get(&asset_id) == Some(&caller);
        if caller != holder && !authorized {
            return Err(DeedlockError::TransferNotAuthorized { asset_id, caller });
        }

        self.holders.insert(asset_id, to);
        self.authorizations.remove(&asset_id);
        tracing::debug!(%asset_id, %from, %to, "transferred asset");
        Ok(())
    }
}
