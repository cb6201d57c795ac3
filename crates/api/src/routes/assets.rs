//! Route definitions for assets and their lifecycle.
//!
//! All routes are mounted under `/assets`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{assets, ledger, lifecycle};
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// GET    /                      -> list_assets
/// POST   /                      -> create_asset
/// POST   /transfer              -> transfer_asset
/// POST   /disposal              -> dispose_asset
/// GET    /{asset_id}            -> get_asset
/// GET    /{asset_id}/transfers  -> list_asset_transfers
/// GET    /{asset_id}/disposal   -> get_asset_disposal
/// GET    /{asset_id}/placement  -> get_asset_placement
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route("/transfer", post(lifecycle::transfer_asset))
        .route("/disposal", post(lifecycle::dispose_asset))
        .route("/{asset_id}", get(assets::get_asset))
        .route("/{asset_id}/transfers", get(ledger::list_asset_transfers))
        .route("/{asset_id}/disposal", get(ledger::get_asset_disposal))
        .route("/{asset_id}/placement", get(ledger::get_asset_placement))
}
