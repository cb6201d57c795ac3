//! Repository for the `companies` and `locations` directory tables.
//!
//! The service only reads these. The inserts exist for seeding and tests.

use assetline_core::types::DbId;
use sqlx::PgPool;

use crate::models::reference::{CompanyRow, LocationRow};

/// Column list for `companies` queries.
const COMPANY_COLUMNS: &str = "id, name, created_at, updated_at";

/// Column list for `locations` queries.
const LOCATION_COLUMNS: &str = "id, company_id, name, code, created_at, updated_at";

pub struct ReferenceRepo;

impl ReferenceRepo {
    pub async fn find_company(pool: &PgPool, id: DbId) -> Result<Option<CompanyRow>, sqlx::Error> {
        let query = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id = $1");
        sqlx::query_as::<_, CompanyRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_location(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LocationRow>, sqlx::Error> {
        let query = format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, LocationRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create_company(pool: &PgPool, name: &str) -> Result<CompanyRow, sqlx::Error> {
        let query = format!("INSERT INTO companies (name) VALUES ($1) RETURNING {COMPANY_COLUMNS}");
        sqlx::query_as::<_, CompanyRow>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    pub async fn create_location(
        pool: &PgPool,
        company_id: DbId,
        name: &str,
        code: &str,
    ) -> Result<LocationRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (company_id, name, code) VALUES ($1, $2, $3) \
             RETURNING {LOCATION_COLUMNS}"
        );
        sqlx::query_as::<_, LocationRow>(&query)
            .bind(company_id)
            .bind(name)
            .bind(code)
            .fetch_one(pool)
            .await
    }
}
