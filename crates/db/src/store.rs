//! [`LifecycleStore`] backed by PostgreSQL.
//!
//! A [`PgLifecycleUnit`] wraps one database transaction. `lock_asset` issues
//! `SELECT ... FOR UPDATE`, so two units acting on the same asset serialize
//! and the second sees the first one's committed status.

use assetline_core::asset::{Asset, AssetFilter, NewAsset};
use assetline_core::error::CoreError;
use assetline_core::ledger::{AssetDisposal, AssetTransfer, NewAssetDisposal, NewAssetTransfer};
use assetline_core::lifecycle::{AssetStatus, LifecycleAction};
use assetline_core::store::{AssetStream, LifecycleStore, LifecycleUnit, Page};
use assetline_core::types::DbId;
use async_trait::async_trait;
use futures::StreamExt;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::{classify, is_unique_violation};
use crate::repositories::disposal_repo::UNIQUE_ASSET_CONSTRAINT;
use crate::repositories::{AssetRepo, DisposalRepo, TransferRepo};

#[derive(Debug, Clone)]
pub struct PgLifecycleStore {
    pool: PgPool,
}

impl PgLifecycleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl LifecycleStore for PgLifecycleStore {
    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(classify)
    }

    async fn find_asset(&self, id: DbId) -> Result<Option<Asset>, CoreError> {
        AssetRepo::find_by_id(&self.pool, id)
            .await
            .map_err(classify)?
            .map(Asset::try_from)
            .transpose()
    }

    async fn find_asset_by_public_id(&self, asset_id: &str) -> Result<Option<Asset>, CoreError> {
        AssetRepo::find_by_public_id(&self.pool, asset_id)
            .await
            .map_err(classify)?
            .map(Asset::try_from)
            .transpose()
    }

    async fn insert_asset(&self, input: &NewAsset) -> Result<Asset, CoreError> {
        let row = AssetRepo::create(&self.pool, input)
            .await
            .map_err(classify)?;
        Asset::try_from(row)
    }

    fn list_assets<'a>(&'a self, filter: &AssetFilter) -> AssetStream<'a> {
        AssetRepo::stream(&self.pool, filter)
            .map(|row| row.map_err(classify).and_then(Asset::try_from))
            .boxed()
    }

    async fn list_transfers(&self, asset_id: DbId) -> Result<Vec<AssetTransfer>, CoreError> {
        let rows = TransferRepo::list_by_asset(&self.pool, asset_id)
            .await
            .map_err(classify)?;
        Ok(rows.into_iter().map(AssetTransfer::from).collect())
    }

    async fn list_company_transfers(
        &self,
        company_id: DbId,
        page: Page,
    ) -> Result<Vec<AssetTransfer>, CoreError> {
        let rows = TransferRepo::list_by_company(&self.pool, company_id, page)
            .await
            .map_err(classify)?;
        Ok(rows.into_iter().map(AssetTransfer::from).collect())
    }

    async fn find_disposal(&self, asset_id: DbId) -> Result<Option<AssetDisposal>, CoreError> {
        DisposalRepo::find_by_asset(&self.pool, asset_id)
            .await
            .map_err(classify)?
            .map(AssetDisposal::try_from)
            .transpose()
    }

    async fn begin(&self) -> Result<Box<dyn LifecycleUnit>, CoreError> {
        let tx = self.pool.begin().await.map_err(classify)?;
        Ok(Box::new(PgLifecycleUnit { tx: Some(tx) }))
    }
}

/// One open transaction. Dropping it without [`LifecycleUnit::commit`] rolls
/// the transaction back.
pub struct PgLifecycleUnit {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgLifecycleUnit {
    fn tx(&mut self) -> Result<&mut Transaction<'static, Postgres>, CoreError> {
        self.tx
            .as_mut()
            .ok_or_else(|| CoreError::Store("unit of work already committed".into()))
    }
}

#[async_trait]
impl LifecycleUnit for PgLifecycleUnit {
    async fn lock_asset(&mut self, id: DbId) -> Result<Option<Asset>, CoreError> {
        let tx = self.tx()?;
        AssetRepo::lock_by_id(tx, id)
            .await
            .map_err(classify)?
            .map(Asset::try_from)
            .transpose()
    }

    async fn save_asset(&mut self, asset: &Asset) -> Result<Asset, CoreError> {
        let tx = self.tx()?;
        let row = AssetRepo::update_lifecycle(tx, asset)
            .await
            .map_err(classify)?
            .ok_or_else(|| CoreError::not_found("Asset", asset.id))?;
        Asset::try_from(row)
    }

    async fn append_transfer(
        &mut self,
        entry: &NewAssetTransfer,
    ) -> Result<AssetTransfer, CoreError> {
        let tx = self.tx()?;
        let row = TransferRepo::create(tx, entry).await.map_err(classify)?;
        Ok(AssetTransfer::from(row))
    }

    async fn append_disposal(
        &mut self,
        entry: &NewAssetDisposal,
    ) -> Result<AssetDisposal, CoreError> {
        let tx = self.tx()?;
        let row = DisposalRepo::create(tx, entry).await.map_err(|err| {
            if is_unique_violation(&err, UNIQUE_ASSET_CONSTRAINT) {
                tracing::warn!(
                    asset_id = entry.asset_id,
                    "Disposal rejected by unique index",
                );
                CoreError::InvalidStateTransition {
                    asset_id: entry.asset_id,
                    status: AssetStatus::Disposed,
                    action: LifecycleAction::Dispose,
                }
            } else {
                classify(err)
            }
        })?;
        AssetDisposal::try_from(row)
    }

    async fn commit(&mut self) -> Result<(), CoreError> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| CoreError::Store("unit of work already committed".into()))?;
        tx.commit().await.map_err(classify)
    }
}
