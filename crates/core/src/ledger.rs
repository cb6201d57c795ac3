//! Audit ledger entries.
//!
//! Transfers and disposals are append-only: a store inserts them once, inside
//! the same transaction as the asset mutation they describe, and never updates
//! or deletes them afterwards.

use serde::{Deserialize, Serialize};

use crate::asset::{Asset, Placement};
use crate::error::CoreError;
use crate::types::{Date, DbId, Money, Timestamp};

// ---------------------------------------------------------------------------
// Disposal method
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisposalMethod {
    Sale,
    Scrap,
    Donation,
}

impl DisposalMethod {
    pub const ALL: &'static [&'static str] = &["sale", "scrap", "donation"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Scrap => "scrap",
            Self::Donation => "donation",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "sale" => Ok(Self::Sale),
            "scrap" => Ok(Self::Scrap),
            "donation" => Ok(Self::Donation),
            _ => Err(CoreError::InvalidArgument(format!(
                "Invalid disposal method '{s}'. Must be one of: {}",
                Self::ALL.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for DisposalMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Transfer entries
// ---------------------------------------------------------------------------

/// A recorded change of location, department or custodian.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetTransfer {
    pub id: DbId,
    /// Internal key of the transferred asset.
    pub asset_id: DbId,
    pub company_id: Option<DbId>,
    pub from_location_id: Option<DbId>,
    pub from_department: Option<String>,
    pub from_assigned: Option<String>,
    pub to_location_id: DbId,
    pub to_department: String,
    pub to_assigned: String,
    pub transferred_by: String,
    pub transfer_date: Date,
    pub note: String,
    pub created_at: Timestamp,
}

impl AssetTransfer {
    pub fn from_placement(&self) -> Placement {
        Placement {
            location_id: self.from_location_id,
            department: self.from_department.clone(),
            assigned: self.from_assigned.clone(),
        }
    }

    pub fn to_placement(&self) -> Placement {
        Placement {
            location_id: Some(self.to_location_id),
            department: Some(self.to_department.clone()),
            assigned: Some(self.to_assigned.clone()),
        }
    }
}

/// Insert payload for a transfer entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssetTransfer {
    pub asset_id: DbId,
    pub company_id: Option<DbId>,
    pub from_location_id: Option<DbId>,
    pub from_department: Option<String>,
    pub from_assigned: Option<String>,
    pub to_location_id: DbId,
    pub to_department: String,
    pub to_assigned: String,
    pub transferred_by: String,
    pub transfer_date: Date,
    pub note: String,
}

// ---------------------------------------------------------------------------
// Disposal entries
// ---------------------------------------------------------------------------

/// The permanent retirement of an asset. At most one per asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetDisposal {
    pub id: DbId,
    pub asset_id: DbId,
    pub company_id: Option<DbId>,
    pub method: DisposalMethod,
    pub disposal_date: Date,
    pub value_received: Money,
    pub note: String,
    pub approved_by: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAssetDisposal {
    pub asset_id: DbId,
    pub company_id: Option<DbId>,
    pub method: DisposalMethod,
    pub disposal_date: Date,
    pub value_received: Money,
    pub note: String,
    pub approved_by: String,
}

// ---------------------------------------------------------------------------
// History replay
// ---------------------------------------------------------------------------

/// Reconstruct where `asset` was, and who held it, at the end of `date`.
///
/// Transfers are ordered by `(transfer_date, id)`. The placement is the
/// destination of the last transfer on or before `date`; failing that, the
/// origin of the first transfer after it; failing that (no transfers at all),
/// the asset's current placement.
pub fn placement_at(asset: &Asset, transfers: &[AssetTransfer], date: Date) -> Placement {
    let key = |t: &&AssetTransfer| (t.transfer_date, t.id);

    let last_before = transfers
        .iter()
        .filter(|t| t.asset_id == asset.id && t.transfer_date <= date)
        .max_by_key(key);
    if let Some(t) = last_before {
        return t.to_placement();
    }

    let first_after = transfers
        .iter()
        .filter(|t| t.asset_id == asset.id && t.transfer_date > date)
        .min_by_key(key);
    match first_after {
        Some(t) => t.from_placement(),
        None => asset.placement(),
    }
}
