//! [`ReferenceResolver`] reading the directory tables.

use assetline_core::error::CoreError;
use assetline_core::reference::{Company, Location, ReferenceResolver};
use assetline_core::types::DbId;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::classify;
use crate::repositories::ReferenceRepo;

#[derive(Debug, Clone)]
pub struct PgReferenceResolver {
    pool: PgPool,
}

impl PgReferenceResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceResolver for PgReferenceResolver {
    async fn resolve_company(&self, id: DbId) -> Result<Company, CoreError> {
        ReferenceRepo::find_company(&self.pool, id)
            .await
            .map_err(classify)?
            .map(Company::from)
            .ok_or_else(|| CoreError::not_found("Company", id))
    }

    async fn resolve_location(&self, id: DbId) -> Result<Location, CoreError> {
        ReferenceRepo::find_location(&self.pool, id)
            .await
            .map_err(classify)?
            .map(Location::from)
            .ok_or_else(|| CoreError::not_found("Location", id))
    }
}
