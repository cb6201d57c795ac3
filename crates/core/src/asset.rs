//! Asset records, categories and public identifiers.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::lifecycle::AssetStatus;
use crate::types::{check_money, Date, DbId, Money, Timestamp};

// ---------------------------------------------------------------------------
// Public identifiers
// ---------------------------------------------------------------------------

/// Prefix of every human-facing asset identifier.
pub const ASSET_ID_PREFIX: &str = "AST-";

/// Minimum number of digits after the prefix (`AST-0001`).
pub const ASSET_ID_MIN_DIGITS: usize = 4;

static ASSET_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^AST-[0-9]{4,}$").expect("valid regex"));

/// Format a sequence value as a public asset identifier.
pub fn format_asset_id(seq: i64) -> String {
    format!("{ASSET_ID_PREFIX}{seq:0width$}", width = ASSET_ID_MIN_DIGITS)
}

/// Whether `s` has the shape of a public asset identifier.
pub fn is_valid_asset_id(s: &str) -> bool {
    ASSET_ID_RE.is_match(s)
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    ItEquipment,
    Furniture,
    Vehicle,
    Machinery,
    Building,
    Other,
}

impl AssetCategory {
    pub const ALL: &'static [&'static str] = &[
        "it_equipment",
        "furniture",
        "vehicle",
        "machinery",
        "building",
        "other",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ItEquipment => "it_equipment",
            Self::Furniture => "furniture",
            Self::Vehicle => "vehicle",
            Self::Machinery => "machinery",
            Self::Building => "building",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "it_equipment" => Ok(Self::ItEquipment),
            "furniture" => Ok(Self::Furniture),
            "vehicle" => Ok(Self::Vehicle),
            "machinery" => Ok(Self::Machinery),
            "building" => Ok(Self::Building),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidArgument(format!(
                "Invalid asset category '{s}'. Must be one of: {}",
                Self::ALL.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// A tracked physical item of company property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    pub id: DbId,
    /// Human-facing identifier, e.g. `AST-0001`. Immutable.
    pub asset_id: String,
    pub company_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub name: String,
    pub category: AssetCategory,
    pub department: Option<String>,
    /// Current custodian.
    pub assigned: Option<String>,
    pub purchase_price: Money,
    pub purchase_date: Date,
    pub status: AssetStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Asset {
    /// Where the asset is right now and who holds it.
    pub fn placement(&self) -> Placement {
        Placement {
            location_id: self.location_id,
            department: self.department.clone(),
            assigned: self.assigned.clone(),
        }
    }
}

/// Location, department and custodian of an asset at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub location_id: Option<DbId>,
    pub department: Option<String>,
    pub assigned: Option<String>,
}

/// Acquisition request as received from a caller. Enumerated fields are raw
/// strings so that unknown values surface as `InvalidArgument`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAsset {
    pub company_id: DbId,
    pub location_id: Option<DbId>,
    pub name: String,
    pub category: String,
    pub department: Option<String>,
    pub assigned: Option<String>,
    pub purchase_price: Money,
    pub purchase_date: Date,
}

/// A validated acquisition, ready to be inserted by a store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAsset {
    pub company_id: DbId,
    pub location_id: Option<DbId>,
    pub name: String,
    pub category: AssetCategory,
    pub department: Option<String>,
    pub assigned: Option<String>,
    pub purchase_price: Money,
    pub purchase_date: Date,
}

impl CreateAsset {
    /// Check field-level rules and convert into a [`NewAsset`].
    ///
    /// Reference checks (company, location) are done by the registry.
    pub fn validate(&self) -> Result<NewAsset, CoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidArgument(
                "Asset name must not be empty".to_string(),
            ));
        }
        check_money("Purchase price", self.purchase_price)?;
        let category = AssetCategory::parse(&self.category)?;

        Ok(NewAsset {
            company_id: self.company_id,
            location_id: self.location_id,
            name: name.to_string(),
            category,
            department: normalize_text(self.department.as_deref()),
            assigned: normalize_text(self.assigned.as_deref()),
            purchase_price: self.purchase_price,
            purchase_date: self.purchase_date,
        })
    }
}

/// Trim free text and turn blank values into `None`.
fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Default page size for asset listing.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum page size for asset listing.
pub const MAX_LIST_LIMIT: i64 = 500;

/// Filters for [`crate::store::LifecycleStore::list_assets`]. All fields are
/// optional; an empty filter lists every asset.
#[derive(Debug, Clone, Default)]
pub struct AssetFilter {
    pub company_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub status: Option<AssetStatus>,
    pub category: Option<AssetCategory>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl AssetFilter {
    pub fn for_company(company_id: DbId) -> Self {
        Self {
            company_id: Some(company_id),
            ..Self::default()
        }
    }

    pub fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_LIST_LIMIT)
            .clamp(1, MAX_LIST_LIMIT)
    }

    pub fn effective_offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    /// Whether `asset` passes every filter that is set. Pagination is not
    /// considered here.
    pub fn matches(&self, asset: &Asset) -> bool {
        self.company_id.is_none_or(|id| asset.company_id == Some(id))
            && self.location_id.is_none_or(|id| asset.location_id == Some(id))
            && self.status.is_none_or(|s| asset.status == s)
            && self.category.is_none_or(|c| asset.category == c)
    }
}
