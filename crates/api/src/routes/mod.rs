pub mod assets;
pub mod companies;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assets                                   list, create
/// /assets/transfer                          transfer (POST)
/// /assets/disposal                          dispose (POST)
/// /assets/{asset_id}                        get by public id
/// /assets/{asset_id}/transfers              transfer history
/// /assets/{asset_id}/disposal               disposal record
/// /assets/{asset_id}/placement?date=        historical placement
///
/// /companies/{company_id}/transfers         company transfer ledger
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assets", assets::router())
        .nest("/companies", companies::router())
}
