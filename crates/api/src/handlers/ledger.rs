//! Read-only handlers over the audit ledger.

use assetline_core::audit::AuditLedger;
use assetline_core::error::CoreError;
use assetline_core::types::DbId;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use super::asset_by_public_id;
use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::query::{PaginationParams, PlacementParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/assets/{asset_id}/transfers
///
/// Transfer history of one asset, oldest first.
pub async fn list_asset_transfers(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let asset = asset_by_public_id(&state, &asset_id).await?;
    let transfers = AuditLedger::new(state.store.as_ref())
        .transfers_for_asset(asset.id)
        .await?;

    Ok(Json(DataResponse { data: transfers }))
}

/// GET /api/v1/assets/{asset_id}/disposal
///
/// 404 when the asset exists but has not been disposed.
pub async fn get_asset_disposal(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let asset = asset_by_public_id(&state, &asset_id).await?;
    let disposal = AuditLedger::new(state.store.as_ref())
        .disposal_for_asset(asset.id)
        .await?
        .ok_or_else(|| CoreError::not_found("AssetDisposal", &asset_id))?;

    Ok(Json(DataResponse { data: disposal }))
}

/// GET /api/v1/assets/{asset_id}/placement?date=YYYY-MM-DD
///
/// Location, department and custodian of the asset at the end of `date`.
pub async fn get_asset_placement(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
    AppQuery(params): AppQuery<PlacementParams>,
) -> AppResult<impl IntoResponse> {
    let asset = asset_by_public_id(&state, &asset_id).await?;
    let placement = AuditLedger::new(state.store.as_ref())
        .placement_at(asset.id, params.date)
        .await?;

    Ok(Json(DataResponse { data: placement }))
}

/// GET /api/v1/companies/{company_id}/transfers
///
/// Transfers recorded for a company, newest first.
pub async fn list_company_transfers(
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let transfers = AuditLedger::new(state.store.as_ref())
        .transfers_for_company(company_id, params.into())
        .await?;

    Ok(Json(DataResponse { data: transfers }))
}
