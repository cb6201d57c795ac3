//! Storage seams for the asset registry and the audit ledger.
//!
//! A [`LifecycleStore`] answers read queries and opens [`LifecycleUnit`]s.
//! A unit is one transaction: everything done through it becomes visible on
//! [`LifecycleUnit::commit`], and nothing does if the unit is dropped first.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::asset::{Asset, AssetFilter, NewAsset};
use crate::error::CoreError;
use crate::ledger::{AssetDisposal, AssetTransfer, NewAssetDisposal, NewAssetTransfer};
use crate::types::DbId;

/// Lazy sequence of assets produced by [`LifecycleStore::list_assets`].
pub type AssetStream<'a> = BoxStream<'a, Result<Asset, CoreError>>;

/// Default page size for ledger listings.
pub const DEFAULT_LEDGER_LIMIT: i64 = 100;

/// Maximum page size for ledger listings.
pub const MAX_LEDGER_LIMIT: i64 = 1000;

/// Limit/offset pair for ledger listings, already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit
                .unwrap_or(DEFAULT_LEDGER_LIMIT)
                .clamp(1, MAX_LEDGER_LIMIT),
            offset: offset.unwrap_or(0).max(0),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[async_trait]
pub trait LifecycleStore: Send + Sync {
    /// Cheap round trip used by health checks.
    async fn ping(&self) -> Result<(), CoreError>;

    async fn find_asset(&self, id: DbId) -> Result<Option<Asset>, CoreError>;

    async fn find_asset_by_public_id(&self, asset_id: &str) -> Result<Option<Asset>, CoreError>;

    /// Insert a new asset with status `active` and a freshly generated
    /// public identifier.
    async fn insert_asset(&self, input: &NewAsset) -> Result<Asset, CoreError>;

    /// Stream assets matching `filter`, ordered by internal id. Nothing is
    /// fetched until the stream is polled; calling again restarts the listing.
    fn list_assets<'a>(&'a self, filter: &AssetFilter) -> AssetStream<'a>;

    /// Transfers of one asset ordered by `(transfer_date, id)`.
    async fn list_transfers(&self, asset_id: DbId) -> Result<Vec<AssetTransfer>, CoreError>;

    /// Transfers recorded for a company, newest first.
    async fn list_company_transfers(
        &self,
        company_id: DbId,
        page: Page,
    ) -> Result<Vec<AssetTransfer>, CoreError>;

    async fn find_disposal(&self, asset_id: DbId) -> Result<Option<AssetDisposal>, CoreError>;

    /// Open a unit of work.
    async fn begin(&self) -> Result<Box<dyn LifecycleUnit>, CoreError>;
}

#[async_trait]
pub trait LifecycleUnit: Send {
    /// Load an asset and hold it exclusively until the unit ends, so that no
    /// concurrent unit can act on a stale status.
    async fn lock_asset(&mut self, id: DbId) -> Result<Option<Asset>, CoreError>;

    /// Persist the lifecycle-managed fields of `asset` (location, department,
    /// custodian, status).
    async fn save_asset(&mut self, asset: &Asset) -> Result<Asset, CoreError>;

    async fn append_transfer(
        &mut self,
        entry: &NewAssetTransfer,
    ) -> Result<AssetTransfer, CoreError>;

    /// Fails with `InvalidStateTransition` if the asset already has a
    /// disposal record.
    async fn append_disposal(
        &mut self,
        entry: &NewAssetDisposal,
    ) -> Result<AssetDisposal, CoreError>;

    /// Make every write of this unit visible. The unit is unusable afterwards.
    async fn commit(&mut self) -> Result<(), CoreError>;
}
