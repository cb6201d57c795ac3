//! Repository for the `asset_transfers` ledger table. Insert and read only.

use assetline_core::ledger::NewAssetTransfer;
use assetline_core::store::Page;
use assetline_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::ledger::AssetTransferRow;

/// Column list for `asset_transfers` queries.
const COLUMNS: &str = "\
    id, asset_id, company_id, \
    from_location_id, from_department, from_assigned, \
    to_location_id, to_department, to_assigned, \
    transferred_by, transfer_date, note, created_at";

pub struct TransferRepo;

impl TransferRepo {
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        input: &NewAssetTransfer,
    ) -> Result<AssetTransferRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO asset_transfers (\
                asset_id, company_id, \
                from_location_id, from_department, from_assigned, \
                to_location_id, to_department, to_assigned, \
                transferred_by, transfer_date, note\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetTransferRow>(&query)
            .bind(input.asset_id)
            .bind(input.company_id)
            .bind(input.from_location_id)
            .bind(input.from_department.as_deref())
            .bind(input.from_assigned.as_deref())
            .bind(input.to_location_id)
            .bind(&input.to_department)
            .bind(&input.to_assigned)
            .bind(&input.transferred_by)
            .bind(input.transfer_date)
            .bind(&input.note)
            .fetch_one(&mut **tx)
            .await
    }

    /// All transfers of one asset, ordered by transfer date then id.
    pub async fn list_by_asset(
        pool: &PgPool,
        asset_id: DbId,
    ) -> Result<Vec<AssetTransferRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM asset_transfers \
             WHERE asset_id = $1 \
             ORDER BY transfer_date ASC, id ASC"
        );
        sqlx::query_as::<_, AssetTransferRow>(&query)
            .bind(asset_id)
            .fetch_all(pool)
            .await
    }

    /// Transfers recorded for a company, newest first.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
        page: Page,
    ) -> Result<Vec<AssetTransferRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM asset_transfers \
             WHERE company_id = $1 \
             ORDER BY id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, AssetTransferRow>(&query)
            .bind(company_id)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(pool)
            .await
    }
}
