use crate::lifecycle::{AssetStatus, LifecycleAction};
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid state transition: cannot {action} asset {asset_id} with status '{status}'")]
    InvalidStateTransition {
        asset_id: DbId,
        status: AssetStatus,
        action: LifecycleAction,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl CoreError {
    /// Build a `NotFound` for any displayable key (internal id or public id).
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// True when the error is a `NotFound` for the given entity name.
    pub fn is_not_found(&self, wanted: &str) -> bool {
        matches!(self, Self::NotFound { entity, .. } if *entity == wanted)
    }
}
