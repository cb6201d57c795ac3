//! Lifecycle workflows.
//!
//! Each workflow first reads the asset and resolves its references without a
//! lock, then runs load, validate, mutate and append inside a single
//! [`LifecycleUnit`](crate::store::LifecycleUnit). The status is checked
//! again under the lock. `company_id` is fixed at creation, so an owner
//! resolved before the unit opens is the owner the lock would see.
//!
//! Any error returned before `commit` drops the unit, leaving the asset and
//! the ledger untouched.

pub mod disposal;
pub mod transfer;

pub use disposal::{DisposalRequest, DisposalWorkflow};
pub use transfer::{TransferRequest, TransferWorkflow};

use crate::asset::Asset;
use crate::error::CoreError;
use crate::store::{LifecycleStore, LifecycleUnit};
use crate::types::DbId;

/// Read the committed asset outside any unit, or fail with `NotFound`.
async fn load_current(store: &dyn LifecycleStore, id: DbId) -> Result<Asset, CoreError> {
    store
        .find_asset(id)
        .await?
        .ok_or_else(|| CoreError::not_found("Asset", id))
}

/// Lock and load an asset inside `unit`, or fail with `NotFound`.
async fn load_locked(unit: &mut dyn LifecycleUnit, id: DbId) -> Result<Asset, CoreError> {
    unit.lock_asset(id)
        .await?
        .ok_or_else(|| CoreError::not_found("Asset", id))
}

/// Require a non-blank actor name (`transferred_by`, `approved_by`).
fn require_actor(field: &str, value: &str) -> Result<String, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::InvalidArgument(format!(
            "{field} must not be empty"
        )));
    }
    Ok(value.to_string())
}
