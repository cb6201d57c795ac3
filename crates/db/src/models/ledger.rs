//! Rows from the `asset_transfers` and `asset_disposals` tables.

use assetline_core::error::CoreError;
use assetline_core::ledger::{AssetDisposal, AssetTransfer, DisposalMethod};
use assetline_core::types::{Date, DbId, Money, Timestamp};
use sqlx::FromRow;

use crate::error::corrupt_column;

#[derive(Debug, Clone, FromRow)]
pub struct AssetTransferRow {
    pub id: DbId,
    pub asset_id: DbId,
    pub company_id: Option<DbId>,
    pub from_location_id: Option<DbId>,
    pub from_department: Option<String>,
    pub from_assigned: Option<String>,
    pub to_location_id: DbId,
    pub to_department: String,
    pub to_assigned: String,
    pub transferred_by: String,
    pub transfer_date: Date,
    pub note: String,
    pub created_at: Timestamp,
}

impl From<AssetTransferRow> for AssetTransfer {
    fn from(row: AssetTransferRow) -> Self {
        AssetTransfer {
            id: row.id,
            asset_id: row.asset_id,
            company_id: row.company_id,
            from_location_id: row.from_location_id,
            from_department: row.from_department,
            from_assigned: row.from_assigned,
            to_location_id: row.to_location_id,
            to_department: row.to_department,
            to_assigned: row.to_assigned,
            transferred_by: row.transferred_by,
            transfer_date: row.transfer_date,
            note: row.note,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct AssetDisposalRow {
    pub id: DbId,
    pub asset_id: DbId,
    pub company_id: Option<DbId>,
    pub method: String,
    pub disposal_date: Date,
    pub value_received: Money,
    pub note: String,
    pub approved_by: String,
    pub created_at: Timestamp,
}

impl TryFrom<AssetDisposalRow> for AssetDisposal {
    type Error = CoreError;

    fn try_from(row: AssetDisposalRow) -> Result<Self, Self::Error> {
        let method = DisposalMethod::parse(&row.method)
            .map_err(|_| corrupt_column("asset_disposals", "method", &row.method))?;

        Ok(AssetDisposal {
            id: row.id,
            asset_id: row.asset_id,
            company_id: row.company_id,
            method,
            disposal_date: row.disposal_date,
            value_received: row.value_received,
            note: row.note,
            approved_by: row.approved_by,
            created_at: row.created_at,
        })
    }
}
