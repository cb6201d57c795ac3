//! In-memory store and resolver.
//!
//! Used by unit tests and the HTTP test suite. A unit of work holds the store
//! mutex for its whole lifetime and writes to a private copy of the state,
//! which replaces the shared state on commit. Dropping the unit discards the
//! copy.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use futures::{stream, StreamExt};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::asset::{format_asset_id, Asset, AssetFilter, NewAsset};
use crate::error::CoreError;
use crate::ledger::{AssetDisposal, AssetTransfer, NewAssetDisposal, NewAssetTransfer};
use crate::lifecycle::{AssetStatus, LifecycleAction};
use crate::reference::{Company, Location, ReferenceResolver};
use crate::store::{AssetStream, LifecycleStore, LifecycleUnit, Page};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
struct MemoryState {
    assets: BTreeMap<DbId, Asset>,
    transfers: Vec<AssetTransfer>,
    disposals: Vec<AssetDisposal>,
    last_asset_id: DbId,
    last_transfer_id: DbId,
    last_disposal_id: DbId,
    last_public_seq: i64,
}

fn bump(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current committed copy of an asset.
    pub async fn snapshot_asset(&self, id: DbId) -> Option<Asset> {
        self.state.lock().await.assets.get(&id).cloned()
    }

    pub async fn transfer_count(&self) -> usize {
        self.state.lock().await.transfers.len()
    }

    pub async fn disposal_count(&self) -> usize {
        self.state.lock().await.disposals.len()
    }

    /// Overwrite an asset's status without going through a workflow.
    pub async fn force_status(&self, id: DbId, status: AssetStatus) {
        if let Some(asset) = self.state.lock().await.assets.get_mut(&id) {
            asset.status = status;
        }
    }
}

#[async_trait]
impl LifecycleStore for InMemoryStore {
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }

    async fn find_asset(&self, id: DbId) -> Result<Option<Asset>, CoreError> {
        Ok(self.snapshot_asset(id).await)
    }

    async fn find_asset_by_public_id(&self, asset_id: &str) -> Result<Option<Asset>, CoreError> {
        let state = self.state.lock().await;
        Ok(state
            .assets
            .values()
            .find(|a| a.asset_id == asset_id)
            .cloned())
    }

    async fn insert_asset(&self, input: &NewAsset) -> Result<Asset, CoreError> {
        let mut state = self.state.lock().await;
        let id = bump(&mut state.last_asset_id);
        let seq = bump(&mut state.last_public_seq);
        let now = Utc::now();

        let asset = Asset {
            id,
            asset_id: format_asset_id(seq),
            company_id: Some(input.company_id),
            location_id: input.location_id,
            name: input.name.clone(),
            category: input.category,
            department: input.department.clone(),
            assigned: input.assigned.clone(),
            purchase_price: input.purchase_price,
            purchase_date: input.purchase_date,
            status: AssetStatus::Active,
            created_at: now,
            updated_at: now,
        };
        state.assets.insert(id, asset.clone());
        Ok(asset)
    }

    fn list_assets<'a>(&'a self, filter: &AssetFilter) -> AssetStream<'a> {
        let filter = filter.clone();
        let state = Arc::clone(&self.state);

        stream::once(async move {
            let state = state.lock().await;
            let page: Vec<Result<Asset, CoreError>> = state
                .assets
                .values()
                .filter(|a| filter.matches(a))
                .skip(filter.effective_offset() as usize)
                .take(filter.effective_limit() as usize)
                .cloned()
                .map(Ok)
                .collect();
            stream::iter(page)
        })
        .flatten()
        .boxed()
    }

    async fn list_transfers(&self, asset_id: DbId) -> Result<Vec<AssetTransfer>, CoreError> {
        let state = self.state.lock().await;
        let mut transfers: Vec<AssetTransfer> = state
            .transfers
            .iter()
            .filter(|t| t.asset_id == asset_id)
            .cloned()
            .collect();
        transfers.sort_by_key(|t| (t.transfer_date, t.id));
        Ok(transfers)
    }

    async fn list_company_transfers(
        &self,
        company_id: DbId,
        page: Page,
    ) -> Result<Vec<AssetTransfer>, CoreError> {
        let state = self.state.lock().await;
        Ok(state
            .transfers
            .iter()
            .rev()
            .filter(|t| t.company_id == Some(company_id))
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn find_disposal(&self, asset_id: DbId) -> Result<Option<AssetDisposal>, CoreError> {
        let state = self.state.lock().await;
        Ok(state
            .disposals
            .iter()
            .find(|d| d.asset_id == asset_id)
            .cloned())
    }

    async fn begin(&self) -> Result<Box<dyn LifecycleUnit>, CoreError> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let working = guard.clone();
        Ok(Box::new(InMemoryUnit {
            guard: Some(guard),
            working,
        }))
    }
}

struct InMemoryUnit {
    guard: Option<OwnedMutexGuard<MemoryState>>,
    working: MemoryState,
}

impl InMemoryUnit {
    fn ensure_open(&self) -> Result<(), CoreError> {
        if self.guard.is_none() {
            return Err(CoreError::Store("unit of work already committed".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl LifecycleUnit for InMemoryUnit {
    async fn lock_asset(&mut self, id: DbId) -> Result<Option<Asset>, CoreError> {
        self.ensure_open()?;
        Ok(self.working.assets.get(&id).cloned())
    }

    async fn save_asset(&mut self, asset: &Asset) -> Result<Asset, CoreError> {
        self.ensure_open()?;
        let stored = self
            .working
            .assets
            .get_mut(&asset.id)
            .ok_or_else(|| CoreError::not_found("Asset", asset.id))?;
        stored.location_id = asset.location_id;
        stored.department = asset.department.clone();
        stored.assigned = asset.assigned.clone();
        stored.status = asset.status;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn append_transfer(
        &mut self,
        entry: &NewAssetTransfer,
    ) -> Result<AssetTransfer, CoreError> {
        self.ensure_open()?;
        let id = bump(&mut self.working.last_transfer_id);
        let transfer = AssetTransfer {
            id,
            asset_id: entry.asset_id,
            company_id: entry.company_id,
            from_location_id: entry.from_location_id,
            from_department: entry.from_department.clone(),
            from_assigned: entry.from_assigned.clone(),
            to_location_id: entry.to_location_id,
            to_department: entry.to_department.clone(),
            to_assigned: entry.to_assigned.clone(),
            transferred_by: entry.transferred_by.clone(),
            transfer_date: entry.transfer_date,
            note: entry.note.clone(),
            created_at: Utc::now(),
        };
        self.working.transfers.push(transfer.clone());
        Ok(transfer)
    }

    async fn append_disposal(
        &mut self,
        entry: &NewAssetDisposal,
    ) -> Result<AssetDisposal, CoreError> {
        self.ensure_open()?;
        if self
            .working
            .disposals
            .iter()
            .any(|d| d.asset_id == entry.asset_id)
        {
            return Err(CoreError::InvalidStateTransition {
                asset_id: entry.asset_id,
                status: AssetStatus::Disposed,
                action: LifecycleAction::Dispose,
            });
        }
        let id = bump(&mut self.working.last_disposal_id);
        let disposal = AssetDisposal {
            id,
            asset_id: entry.asset_id,
            company_id: entry.company_id,
            method: entry.method,
            disposal_date: entry.disposal_date,
            value_received: entry.value_received,
            note: entry.note.clone(),
            approved_by: entry.approved_by.clone(),
            created_at: Utc::now(),
        };
        self.working.disposals.push(disposal.clone());
        Ok(disposal)
    }

    async fn commit(&mut self) -> Result<(), CoreError> {
        let mut guard = self
            .guard
            .take()
            .ok_or_else(|| CoreError::Store("unit of work already committed".into()))?;
        *guard = std::mem::take(&mut self.working);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct InMemoryResolver {
    companies: RwLock<HashMap<DbId, Company>>,
    locations: RwLock<HashMap<DbId, Location>>,
}

impl InMemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_company(&self, id: DbId, name: &str) {
        self.companies
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                id,
                Company {
                    id,
                    name: name.to_string(),
                },
            );
    }

    pub fn remove_company(&self, id: DbId) {
        self.companies
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }

    pub fn add_location(&self, id: DbId, company_id: DbId, name: &str) {
        self.locations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                id,
                Location {
                    id,
                    company_id,
                    name: name.to_string(),
                    code: format!("LOC-{id}"),
                },
            );
    }
}

#[async_trait]
impl ReferenceResolver for InMemoryResolver {
    async fn resolve_company(&self, id: DbId) -> Result<Company, CoreError> {
        self.companies
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Company", id))
    }

    async fn resolve_location(&self, id: DbId) -> Result<Location, CoreError> {
        self.locations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Location", id))
    }
}
