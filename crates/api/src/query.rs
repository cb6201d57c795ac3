//! Shared query parameter types for API handlers.

use assetline_core::asset::{AssetCategory, AssetFilter};
use assetline_core::error::CoreError;
use assetline_core::lifecycle::AssetStatus;
use assetline_core::store::Page;
use assetline_core::types::{Date, DbId};
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`). Values are clamped
/// when converted into a [`Page`].
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<PaginationParams> for Page {
    fn from(params: PaginationParams) -> Self {
        Page::new(params.limit, params.offset)
    }
}

/// Query parameters for `GET /assets`. Enumerated filters arrive as raw
/// strings so unknown values surface as `INVALID_ARGUMENT`.
#[derive(Debug, Default, Deserialize)]
pub struct AssetListParams {
    pub company_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl TryFrom<AssetListParams> for AssetFilter {
    type Error = CoreError;

    fn try_from(params: AssetListParams) -> Result<Self, Self::Error> {
        Ok(AssetFilter {
            company_id: params.company_id,
            location_id: params.location_id,
            status: params.status.as_deref().map(AssetStatus::parse).transpose()?,
            category: params
                .category
                .as_deref()
                .map(AssetCategory::parse)
                .transpose()?,
            limit: params.limit,
            offset: params.offset,
        })
    }
}

/// `?date=YYYY-MM-DD` for placement lookups.
#[derive(Debug, Deserialize)]
pub struct PlacementParams {
    pub date: Date,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_list_params_parse_enumerations() {
        let filter = AssetFilter::try_from(AssetListParams {
            status: Some("pending".into()),
            category: Some("vehicle".into()),
            ..AssetListParams::default()
        })
        .unwrap();
        assert_eq!(filter.status, Some(AssetStatus::Pending));
        assert_eq!(filter.category, Some(AssetCategory::Vehicle));
    }

    #[test]
    fn test_list_params_reject_unknown_status() {
        assert_matches!(
            AssetFilter::try_from(AssetListParams {
                status: Some("lost".into()),
                ..AssetListParams::default()
            }),
            Err(CoreError::InvalidArgument(_))
        );
    }
}
