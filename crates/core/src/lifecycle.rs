//! Asset lifecycle state machine.
//!
//! An asset starts `active`. A transfer moves it to `pending`; a disposal
//! moves it to `disposed`, which is terminal. `pending` has no confirmation
//! step, so it accepts the same transitions as `active`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Asset status
// ---------------------------------------------------------------------------

/// Operational status of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Active,
    Pending,
    Disposed,
}

impl AssetStatus {
    /// All valid status values as stored in the database.
    pub const ALL: &'static [&'static str] = &["active", "pending", "disposed"];

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Disposed => "disposed",
        }
    }

    /// Parse a status string from the database or a query parameter.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "active" => Ok(Self::Active),
            "pending" => Ok(Self::Pending),
            "disposed" => Ok(Self::Disposed),
            _ => Err(CoreError::InvalidArgument(format!(
                "Invalid asset status '{s}'. Must be one of: {}",
                Self::ALL.join(", ")
            ))),
        }
    }

    /// A terminal status accepts no further lifecycle transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Disposed)
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// A lifecycle operation that changes an asset's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleAction {
    Transfer,
    Dispose,
}

impl LifecycleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transfer => "transfer",
            Self::Dispose => "dispose",
        }
    }

    /// Status an asset lands in after this action succeeds.
    pub fn target_status(&self) -> AssetStatus {
        match self {
            Self::Transfer => AssetStatus::Pending,
            Self::Dispose => AssetStatus::Disposed,
        }
    }
}

impl std::fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether `action` may be applied to an asset in `current` status.
///
/// Returns the status the asset moves to, or `InvalidStateTransition` when
/// the asset is already in a terminal state.
pub fn check_transition(
    asset_id: DbId,
    current: AssetStatus,
    action: LifecycleAction,
) -> Result<AssetStatus, CoreError> {
    if current.is_terminal() {
        return Err(CoreError::InvalidStateTransition {
            asset_id,
            status: current,
            action,
        });
    }
    Ok(action.target_status())
}
