//! Handlers for lifecycle transitions: transfer and disposal.
//!
//! Both take the internal asset key in the `asset` body field and answer
//! with the ledger entry they recorded.

use assetline_core::types::{Date, DbId};
use assetline_core::workflow::{
    DisposalRequest, DisposalWorkflow, TransferRequest, TransferWorkflow,
};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /assets/transfer`.
#[derive(Debug, Deserialize, Validate)]
pub struct TransferBody {
    #[validate(range(min = 1))]
    pub asset: DbId,
    #[validate(range(min = 1))]
    pub to_location: DbId,
    #[validate(length(min = 1, max = 200))]
    pub to_department: String,
    #[validate(length(min = 1, max = 200))]
    pub to_assigned: String,
    #[validate(length(min = 1, max = 200))]
    pub transferred_by: String,
    pub transfer_date: Date,
    #[validate(length(max = 2000))]
    pub note: Option<String>,
}

impl From<TransferBody> for TransferRequest {
    fn from(body: TransferBody) -> Self {
        TransferRequest {
            asset: body.asset,
            to_location: body.to_location,
            to_department: body.to_department,
            to_assigned: body.to_assigned,
            transferred_by: body.transferred_by,
            transfer_date: body.transfer_date,
            note: body.note,
        }
    }
}

/// Body of `POST /assets/disposal`. `method` is checked by the workflow so an
/// unknown method is reported as `INVALID_ARGUMENT`.
#[derive(Debug, Deserialize, Validate)]
pub struct DisposalBody {
    #[validate(range(min = 1))]
    pub asset: DbId,
    pub method: String,
    pub disposal_date: Date,
    #[serde(default)]
    pub value_received: Decimal,
    #[validate(length(max = 2000))]
    pub note: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub approved_by: String,
}

impl From<DisposalBody> for DisposalRequest {
    fn from(body: DisposalBody) -> Self {
        DisposalRequest {
            asset: body.asset,
            method: body.method,
            disposal_date: body.disposal_date,
            value_received: body.value_received,
            note: body.note,
            approved_by: body.approved_by,
        }
    }
}

/// POST /api/v1/assets/transfer
pub async fn transfer_asset(
    State(state): State<AppState>,
    AppJson(body): AppJson<TransferBody>,
) -> AppResult<impl IntoResponse> {
    body.validate()?;

    let entry = TransferWorkflow::new(state.store.as_ref(), state.resolver.as_ref())
        .transfer(&body.into())
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// POST /api/v1/assets/disposal
pub async fn dispose_asset(
    State(state): State<AppState>,
    AppJson(body): AppJson<DisposalBody>,
) -> AppResult<impl IntoResponse> {
    body.validate()?;

    let record = DisposalWorkflow::new(state.store.as_ref(), state.resolver.as_ref())
        .dispose(&body.into())
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}
