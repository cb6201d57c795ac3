pub mod assets;
pub mod ledger;
pub mod lifecycle;

use assetline_core::asset::Asset;
use assetline_core::error::CoreError;
use assetline_core::registry::AssetRegistry;

use crate::error::AppResult;
use crate::state::AppState;

/// Look up an asset by its `AST-` identifier, returning NotFound if absent.
async fn asset_by_public_id(state: &AppState, asset_id: &str) -> AppResult<Asset> {
    AssetRegistry::new(state.store.as_ref(), state.resolver.as_ref())
        .get_by_public_id(asset_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Asset", asset_id).into())
}
