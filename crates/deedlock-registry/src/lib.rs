//! # deedlock-registry
//!
//! The asset registry collaborator: the canonical mapping of
//! asset-id → holder account. The escrow core consumes the
//! [`AssetRegistry`] trait and never owns this mapping itself; hosts
//! embedding Deedlock implement the trait over their real registry.
//! [`InMemoryRegistry`] is the reference implementation used by tests.

pub mod memory;

pub use memory::InMemoryRegistry;

use deedlock_types::{AccountId, AssetId, Result};

/// The registry operations the escrow depends on.
///
/// Transfer authorization is single-shot: a holder authorizes one
/// custodian per asset, and a completed transfer consumes it. The seller
/// performs the authorization step before calling `list`, exactly like
/// approving a token custodian before an escrow deposit.
pub trait AssetRegistry {
    /// The account currently holding the asset, if it exists.
    fn holder(&self, asset_id: AssetId) -> Option<AccountId>;

    /// Grant `custodian` the right to transfer the asset on the holder's
    /// behalf. Only the current holder may call this.
    fn authorize_transfer(
        &mut self,
        caller: AccountId,
        asset_id: AssetId,
        custodian: AccountId,
    ) -> Result<()>;

    /// Move the asset from `from` to `to`. The caller must be the current
    /// holder or its authorized custodian; `from` must match the current
    /// holder. A successful transfer clears any outstanding authorization.
    fn transfer(
        &mut self,
        caller: AccountId,
        from: AccountId,
        to: AccountId,
        asset_id: AssetId,
    ) -> Result<()>;
}
