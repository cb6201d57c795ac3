//! Company and location references.
//!
//! Companies and locations belong to the directory service. The lifecycle
//! core only reads them, through a [`ReferenceResolver`], and re-resolves on
//! every operation instead of caching.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: DbId,
    pub company_id: DbId,
    pub name: String,
    pub code: String,
}

/// Lookup capability for externally owned reference records.
///
/// Both methods fail with [`CoreError::NotFound`] when the id does not exist.
#[async_trait]
pub trait ReferenceResolver: Send + Sync {
    async fn resolve_company(&self, id: DbId) -> Result<Company, CoreError>;

    async fn resolve_location(&self, id: DbId) -> Result<Location, CoreError>;
}

/// Resolve the owning company of an asset for denormalized ledger storage.
///
/// A missing reference, or one the resolver no longer knows, is recorded as
/// `None`. Any other resolver failure is returned.
pub async fn resolve_owner(
    resolver: &dyn ReferenceResolver,
    asset_id: DbId,
    company_id: Option<DbId>,
) -> Result<Option<Company>, CoreError> {
    let Some(company_id) = company_id else {
        return Ok(None);
    };

    match resolver.resolve_company(company_id).await {
        Ok(company) => Ok(Some(company)),
        Err(err) if err.is_not_found("Company") => {
            tracing::warn!(
                asset_id,
                company_id,
                "Owning company no longer resolvable, recording ledger entry without company",
            );
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Reject a location that belongs to a different company than the asset.
pub fn ensure_same_tenant(
    asset_company_id: Option<DbId>,
    location: &Location,
) -> Result<(), CoreError> {
    match asset_company_id {
        Some(company_id) if company_id != location.company_id => {
            Err(CoreError::InvalidArgument(format!(
                "Location {} belongs to company {}, not company {company_id}",
                location.id, location.company_id
            )))
        }
        _ => Ok(()),
    }
}
