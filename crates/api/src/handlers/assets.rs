//! Handlers for the asset registry.

use assetline_core::asset::{AssetFilter, CreateAsset};
use assetline_core::registry::AssetRegistry;
use assetline_core::types::{Date, DbId};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use futures::TryStreamExt;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use super::asset_by_public_id;
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::AssetListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /assets`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssetBody {
    #[validate(range(min = 1))]
    pub company_id: DbId,
    #[validate(range(min = 1))]
    pub location_id: Option<DbId>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub category: String,
    #[validate(length(max = 200))]
    pub department: Option<String>,
    #[validate(length(max = 200))]
    pub assigned: Option<String>,
    pub purchase_price: Decimal,
    pub purchase_date: Date,
}

impl From<CreateAssetBody> for CreateAsset {
    fn from(body: CreateAssetBody) -> Self {
        CreateAsset {
            company_id: body.company_id,
            location_id: body.location_id,
            name: body.name,
            category: body.category,
            department: body.department,
            assigned: body.assigned,
            purchase_price: body.purchase_price,
            purchase_date: body.purchase_date,
        }
    }
}

/// GET /api/v1/assets
///
/// List assets with optional company, location, status and category filters.
pub async fn list_assets(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<AssetListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = AssetFilter::try_from(params)?;
    let registry = AssetRegistry::new(state.store.as_ref(), state.resolver.as_ref());
    let assets: Vec<_> = registry.list(&filter).try_collect().await?;

    Ok(Json(DataResponse { data: assets }))
}

/// POST /api/v1/assets
///
/// Register a new asset. Status starts as `active` and a public `AST-` id is
/// assigned.
pub async fn create_asset(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateAssetBody>,
) -> AppResult<impl IntoResponse> {
    body.validate()?;

    let asset = AssetRegistry::new(state.store.as_ref(), state.resolver.as_ref())
        .create(&body.into())
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// GET /api/v1/assets/{asset_id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let asset = asset_by_public_id(&state, &asset_id).await?;

    Ok(Json(DataResponse { data: asset }))
}
