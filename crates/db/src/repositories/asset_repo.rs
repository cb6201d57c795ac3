//! Repository for the `assets` table.

use assetline_core::asset::{format_asset_id, Asset, AssetFilter, NewAsset};
use assetline_core::types::DbId;
use futures::stream::BoxStream;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::asset::AssetRow;

/// Column list for `assets` queries.
const COLUMNS: &str = "\
    id, asset_id, company_id, location_id, name, category, \
    department, assigned, purchase_price, purchase_date, status, \
    created_at, updated_at";

/// Filtered listing. Kept as a literal so the stream returned by
/// [`AssetRepo::stream`] does not borrow a locally built string.
const LIST_QUERY: &str = "\
    SELECT id, asset_id, company_id, location_id, name, category, \
           department, assigned, purchase_price, purchase_date, status, \
           created_at, updated_at \
    FROM assets \
    WHERE ($1::BIGINT IS NULL OR company_id = $1) \
      AND ($2::BIGINT IS NULL OR location_id = $2) \
      AND ($3::TEXT IS NULL OR status = $3) \
      AND ($4::TEXT IS NULL OR category = $4) \
    ORDER BY id \
    LIMIT $5 OFFSET $6";

pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset with status `active`. The public identifier is
    /// drawn from `asset_public_id_seq`.
    pub async fn create(pool: &PgPool, input: &NewAsset) -> Result<AssetRow, sqlx::Error> {
        let (seq,): (i64,) = sqlx::query_as("SELECT nextval('asset_public_id_seq')")
            .fetch_one(pool)
            .await?;

        let query = format!(
            "INSERT INTO assets (\
                asset_id, company_id, location_id, name, category, \
                department, assigned, purchase_price, purchase_date, status\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'active') \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(format_asset_id(seq))
            .bind(input.company_id)
            .bind(input.location_id)
            .bind(&input.name)
            .bind(input.category.as_str())
            .bind(input.department.as_deref())
            .bind(input.assigned.as_deref())
            .bind(input.purchase_price)
            .bind(input.purchase_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AssetRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an asset by its `AST-` identifier.
    pub async fn find_by_public_id(
        pool: &PgPool,
        asset_id: &str,
    ) -> Result<Option<AssetRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE asset_id = $1");
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(asset_id)
            .fetch_optional(pool)
            .await
    }

    /// Stream one page of assets matching `filter`, ordered by id. Rows are
    /// fetched as the stream is polled.
    pub fn stream<'a>(
        pool: &'a PgPool,
        filter: &AssetFilter,
    ) -> BoxStream<'a, Result<AssetRow, sqlx::Error>> {
        sqlx::query_as::<_, AssetRow>(LIST_QUERY)
            .bind(filter.company_id)
            .bind(filter.location_id)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.category.map(|c| c.as_str()))
            .bind(filter.effective_limit())
            .bind(filter.effective_offset())
            .fetch(pool)
    }

    // -----------------------------------------------------------------------
    // Transactional operations
    // -----------------------------------------------------------------------

    /// Load an asset and take a row lock held until the transaction ends.
    pub async fn lock_by_id(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<AssetRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Write the lifecycle-managed columns of `asset`. Returns `None` if the
    /// row does not exist.
    pub async fn update_lifecycle(
        tx: &mut Transaction<'_, Postgres>,
        asset: &Asset,
    ) -> Result<Option<AssetRow>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                location_id = $2, \
                department = $3, \
                assigned = $4, \
                status = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(asset.id)
            .bind(asset.location_id)
            .bind(asset.department.as_deref())
            .bind(asset.assigned.as_deref())
            .bind(asset.status.as_str())
            .fetch_optional(&mut **tx)
            .await
    }
}
