//! Rows from the directory tables.

use assetline_core::reference::{Company, Location};
use assetline_core::types::{DbId, Timestamp};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CompanyRow {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct LocationRow {
    pub id: DbId,
    pub company_id: DbId,
    pub name: String,
    pub code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            company_id: row.company_id,
            name: row.name,
            code: row.code,
        }
    }
}
