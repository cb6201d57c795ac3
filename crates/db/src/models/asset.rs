//! Rows from the `assets` table.

use assetline_core::asset::{Asset, AssetCategory};
use assetline_core::error::CoreError;
use assetline_core::lifecycle::AssetStatus;
use assetline_core::types::{Date, DbId, Money, Timestamp};
use sqlx::FromRow;

use crate::error::corrupt_column;

#[derive(Debug, Clone, FromRow)]
pub struct AssetRow {
    pub id: DbId,
    pub asset_id: String,
    pub company_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub name: String,
    pub category: String,
    pub department: Option<String>,
    pub assigned: Option<String>,
    pub purchase_price: Money,
    pub purchase_date: Date,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<AssetRow> for Asset {
    type Error = CoreError;

    fn try_from(row: AssetRow) -> Result<Self, Self::Error> {
        let category = AssetCategory::parse(&row.category)
            .map_err(|_| corrupt_column("assets", "category", &row.category))?;
        let status = AssetStatus::parse(&row.status)
            .map_err(|_| corrupt_column("assets", "status", &row.status))?;

        Ok(Asset {
            id: row.id,
            asset_id: row.asset_id,
            company_id: row.company_id,
            location_id: row.location_id,
            name: row.name,
            category,
            department: row.department,
            assigned: row.assigned,
            purchase_price: row.purchase_price,
            purchase_date: row.purchase_date,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
