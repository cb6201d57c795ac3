use std::sync::Arc;

use assetline_core::reference::ReferenceResolver;
use assetline_core::store::LifecycleStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Assets and the lifecycle ledger.
    pub store: Arc<dyn LifecycleStore>,
    /// Company and location lookups.
    pub resolver: Arc<dyn ReferenceResolver>,
}
