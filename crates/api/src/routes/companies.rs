//! Company-scoped ledger routes, mounted under `/companies`.

use axum::routing::get;
use axum::Router;

use crate::handlers::ledger;
use crate::state::AppState;

/// ```text
/// GET    /{company_id}/transfers  -> list_company_transfers
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{company_id}/transfers",
        get(ledger::list_company_transfers),
    )
}
