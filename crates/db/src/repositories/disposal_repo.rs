//! Repository for the `asset_disposals` ledger table.

use assetline_core::ledger::NewAssetDisposal;
use assetline_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::ledger::AssetDisposalRow;

/// Column list for `asset_disposals` queries.
const COLUMNS: &str = "\
    id, asset_id, company_id, method, disposal_date, \
    value_received, note, approved_by, created_at";

/// Unique index allowing one disposal per asset.
pub const UNIQUE_ASSET_CONSTRAINT: &str = "uq_asset_disposals_asset_id";

pub struct DisposalRepo;

impl DisposalRepo {
    /// Insert a disposal. Fails with a unique violation on
    /// [`UNIQUE_ASSET_CONSTRAINT`] if the asset was already disposed.
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        input: &NewAssetDisposal,
    ) -> Result<AssetDisposalRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO asset_disposals (\
                asset_id, company_id, method, disposal_date, \
                value_received, note, approved_by\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetDisposalRow>(&query)
            .bind(input.asset_id)
            .bind(input.company_id)
            .bind(input.method.as_str())
            .bind(input.disposal_date)
            .bind(input.value_received)
            .bind(&input.note)
            .bind(&input.approved_by)
            .fetch_one(&mut **tx)
            .await
    }

    pub async fn find_by_asset(
        pool: &PgPool,
        asset_id: DbId,
    ) -> Result<Option<AssetDisposalRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM asset_disposals WHERE asset_id = $1");
        sqlx::query_as::<_, AssetDisposalRow>(&query)
            .bind(asset_id)
            .fetch_optional(pool)
            .await
    }
}
