//! Asset registry: the source of truth for where an asset is now.

use crate::asset::{is_valid_asset_id, Asset, AssetFilter, CreateAsset};
use crate::error::CoreError;
use crate::reference::{ensure_same_tenant, ReferenceResolver};
use crate::store::{AssetStream, LifecycleStore};
use crate::types::DbId;

/// Registry operations over an injected store and resolver.
pub struct AssetRegistry<'a> {
    store: &'a dyn LifecycleStore,
    resolver: &'a dyn ReferenceResolver,
}

impl<'a> AssetRegistry<'a> {
    pub fn new(store: &'a dyn LifecycleStore, resolver: &'a dyn ReferenceResolver) -> Self {
        Self { store, resolver }
    }

    /// Load an asset by internal key.
    pub async fn get(&self, id: DbId) -> Result<Asset, CoreError> {
        self.store
            .find_asset(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Asset", id))
    }

    /// Look up an asset by its public identifier. Absence is `Ok(None)`.
    pub async fn get_by_public_id(&self, asset_id: &str) -> Result<Option<Asset>, CoreError> {
        if !is_valid_asset_id(asset_id) {
            return Ok(None);
        }
        self.store.find_asset_by_public_id(asset_id).await
    }

    /// Register a newly acquired asset with status `active`.
    pub async fn create(&self, input: &CreateAsset) -> Result<Asset, CoreError> {
        let new = input.validate()?;

        self.resolver.resolve_company(new.company_id).await?;
        if let Some(location_id) = new.location_id {
            let location = self.resolver.resolve_location(location_id).await?;
            ensure_same_tenant(Some(new.company_id), &location)?;
        }

        let asset = self.store.insert_asset(&new).await?;

        tracing::info!(
            asset_id = asset.id,
            public_id = %asset.asset_id,
            company_id = new.company_id,
            category = %asset.category,
            "Asset registered",
        );

        Ok(asset)
    }

    pub fn list(&self, filter: &AssetFilter) -> AssetStream<'a> {
        self.store.list_assets(filter)
    }
}
