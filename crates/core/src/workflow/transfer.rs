//! Transfer of an asset to a new location, department and custodian.

use serde::Deserialize;

use crate::error::CoreError;
use crate::ledger::{AssetTransfer, NewAssetTransfer};
use crate::lifecycle::{check_transition, LifecycleAction};
use crate::reference::{ensure_same_tenant, resolve_owner, ReferenceResolver};
use crate::store::LifecycleStore;
use crate::types::{Date, DbId};

use super::{load_current, load_locked, require_actor};

/// Input for [`TransferWorkflow::transfer`].
#[derive(Debug, Clone, Deserialize)]
pub struct TransferRequest {
    /// Internal key of the asset.
    pub asset: DbId,
    pub to_location: DbId,
    pub to_department: String,
    pub to_assigned: String,
    pub transferred_by: String,
    pub transfer_date: Date,
    pub note: Option<String>,
}

pub struct TransferWorkflow<'a> {
    store: &'a dyn LifecycleStore,
    resolver: &'a dyn ReferenceResolver,
}

impl<'a> TransferWorkflow<'a> {
    pub fn new(store: &'a dyn LifecycleStore, resolver: &'a dyn ReferenceResolver) -> Self {
        Self { store, resolver }
    }

    /// Move an asset and record the movement in the ledger.
    ///
    /// The `from_*` fields of the returned entry are the asset's placement as
    /// read under lock, before any mutation. Transfers to the current
    /// placement are recorded like any other.
    pub async fn transfer(&self, req: &TransferRequest) -> Result<AssetTransfer, CoreError> {
        let transferred_by = require_actor("transferred_by", &req.transferred_by)?;
        let to_department = req.to_department.trim().to_string();
        let to_assigned = req.to_assigned.trim().to_string();

        // References are resolved before the unit opens: a unit must never
        // wait on a second store connection while it holds the row lock.
        let current = load_current(self.store, req.asset).await?;
        check_transition(current.id, current.status, LifecycleAction::Transfer)?;

        let to_location = self.resolver.resolve_location(req.to_location).await?;
        ensure_same_tenant(current.company_id, &to_location)?;

        let company = resolve_owner(self.resolver, current.id, current.company_id).await?;

        let mut unit = self.store.begin().await?;
        let mut asset = load_locked(unit.as_mut(), req.asset).await?;

        // Re-checked under lock; a disposal may have committed meanwhile.
        let next_status = check_transition(asset.id, asset.status, LifecycleAction::Transfer)?;

        let from = asset.placement();

        asset.location_id = Some(to_location.id);
        asset.department = Some(to_department.clone());
        asset.assigned = Some(to_assigned.clone());
        asset.status = next_status;

        unit.save_asset(&asset).await?;
        let entry = unit
            .append_transfer(&NewAssetTransfer {
                asset_id: asset.id,
                company_id: company.map(|c| c.id),
                from_location_id: from.location_id,
                from_department: from.department,
                from_assigned: from.assigned,
                to_location_id: to_location.id,
                to_department,
                to_assigned,
                transferred_by,
                transfer_date: req.transfer_date,
                note: req.note.clone().unwrap_or_default(),
            })
            .await?;
        unit.commit().await?;

        tracing::info!(
            asset_id = asset.id,
            public_id = %asset.asset_id,
            transfer_id = entry.id,
            from_location_id = ?entry.from_location_id,
            to_location_id = entry.to_location_id,
            status = %asset.status,
            "Asset transferred",
        );

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::lifecycle::AssetStatus;
    use crate::memory::{InMemoryResolver, InMemoryStore};
    use crate::test_fixtures::{date, seed_asset, seeded_resolver};

    fn request(asset: DbId, to_location: DbId) -> TransferRequest {
        TransferRequest {
            asset,
            to_location,
            to_department: "Ops".to_string(),
            to_assigned: "Tom".to_string(),
            transferred_by: "Kevin".to_string(),
            transfer_date: date(2025, 4, 16),
            note: None,
        }
    }

    async fn setup() -> (InMemoryStore, InMemoryResolver, DbId) {
        let store = InMemoryStore::new();
        let resolver = seeded_resolver();
        let asset = seed_asset(&store, 1, Some(10), "Finance", "Jane").await;
        (store, resolver, asset.id)
    }

    #[tokio::test]
    async fn test_transfer_records_snapshot_and_moves_asset() {
        let (store, resolver, id) = setup().await;
        let workflow = TransferWorkflow::new(&store, &resolver);

        let entry = workflow.transfer(&request(id, 11)).await.unwrap();

        assert_eq!(entry.asset_id, id);
        assert_eq!(entry.company_id, Some(1));
        assert_eq!(entry.from_location_id, Some(10));
        assert_eq!(entry.from_department.as_deref(), Some("Finance"));
        assert_eq!(entry.from_assigned.as_deref(), Some("Jane"));
        assert_eq!(entry.to_location_id, 11);
        assert_eq!(entry.to_department, "Ops");
        assert_eq!(entry.to_assigned, "Tom");
        assert_eq!(entry.transferred_by, "Kevin");
        assert_eq!(entry.note, "");

        let asset = store.snapshot_asset(id).await.unwrap();
        assert_eq!(asset.location_id, Some(11));
        assert_eq!(asset.department.as_deref(), Some("Ops"));
        assert_eq!(asset.assigned.as_deref(), Some("Tom"));
        assert_eq!(asset.status, AssetStatus::Pending);
        assert_eq!(store.transfer_count().await, 1);
    }

    #[tokio::test]
    async fn test_second_transfer_snapshots_first_destination() {
        let (store, resolver, id) = setup().await;
        let workflow = TransferWorkflow::new(&store, &resolver);

        workflow.transfer(&request(id, 11)).await.unwrap();
        let mut back = request(id, 10);
        back.to_department = "Finance".to_string();
        back.to_assigned = "Jane".to_string();
        let entry = workflow.transfer(&back).await.unwrap();

        assert_eq!(entry.from_location_id, Some(11));
        assert_eq!(entry.from_department.as_deref(), Some("Ops"));
        assert_eq!(entry.from_assigned.as_deref(), Some("Tom"));
    }

    #[tokio::test]
    async fn test_noop_transfer_is_still_recorded() {
        let (store, resolver, id) = setup().await;
        let workflow = TransferWorkflow::new(&store, &resolver);

        let mut same = request(id, 10);
        same.to_department = "Finance".to_string();
        same.to_assigned = "Jane".to_string();
        same.note = Some("annual audit".to_string());
        let entry = workflow.transfer(&same).await.unwrap();

        assert_eq!(entry.from_placement(), entry.to_placement());
        assert_eq!(entry.note, "annual audit");
        assert_eq!(store.transfer_count().await, 1);
    }

    #[tokio::test]
    async fn test_destination_text_is_trimmed() {
        let (store, resolver, id) = setup().await;
        let workflow = TransferWorkflow::new(&store, &resolver);

        let mut req = request(id, 11);
        req.to_department = "  Ops ".to_string();
        req.to_assigned = "\tTom  ".to_string();
        let entry = workflow.transfer(&req).await.unwrap();

        assert_eq!(entry.to_department, "Ops");
        assert_eq!(entry.to_assigned, "Tom");
        let asset = store.snapshot_asset(id).await.unwrap();
        assert_eq!(asset.department.as_deref(), Some("Ops"));
        assert_eq!(asset.assigned.as_deref(), Some("Tom"));
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let (store, resolver, _) = setup().await;
        let workflow = TransferWorkflow::new(&store, &resolver);

        assert_matches!(
            workflow.transfer(&request(999, 11)).await,
            Err(CoreError::NotFound { entity: "Asset", .. })
        );
    }

    #[tokio::test]
    async fn test_unknown_location_leaves_asset_untouched() {
        let (store, resolver, id) = setup().await;
        let before = store.snapshot_asset(id).await.unwrap();
        let workflow = TransferWorkflow::new(&store, &resolver);

        assert_matches!(
            workflow.transfer(&request(id, 404)).await,
            Err(CoreError::NotFound { entity: "Location", .. })
        );
        assert_eq!(store.snapshot_asset(id).await.unwrap(), before);
        assert_eq!(store.transfer_count().await, 0);
    }

    #[tokio::test]
    async fn test_location_of_other_company_rejected() {
        let (store, resolver, id) = setup().await;
        let workflow = TransferWorkflow::new(&store, &resolver);

        assert_matches!(
            workflow.transfer(&request(id, 20)).await,
            Err(CoreError::InvalidArgument(_))
        );
        assert_eq!(store.transfer_count().await, 0);
    }

    #[tokio::test]
    async fn test_blank_actor_rejected() {
        let (store, resolver, id) = setup().await;
        let workflow = TransferWorkflow::new(&store, &resolver);

        let mut req = request(id, 11);
        req.transferred_by = "  ".to_string();
        assert_matches!(
            workflow.transfer(&req).await,
            Err(CoreError::InvalidArgument(_))
        );
    }

    #[tokio::test]
    async fn test_vanished_company_is_recorded_as_none() {
        let store = InMemoryStore::new();
        let resolver = seeded_resolver();
        let asset = seed_asset(&store, 1, Some(10), "Finance", "Jane").await;
        resolver.remove_company(1);

        let workflow = TransferWorkflow::new(&store, &resolver);
        let entry = workflow.transfer(&request(asset.id, 11)).await.unwrap();

        assert_eq!(entry.company_id, None);
    }

    #[tokio::test]
    async fn test_transfer_of_disposed_asset_rejected() {
        let (store, resolver, id) = setup().await;
        store.force_status(id, AssetStatus::Disposed).await;
        let workflow = TransferWorkflow::new(&store, &resolver);

        assert_matches!(
            workflow.transfer(&request(id, 11)).await,
            Err(CoreError::InvalidStateTransition {
                status: AssetStatus::Disposed,
                action: LifecycleAction::Transfer,
                ..
            })
        );
        assert_eq!(store.transfer_count().await, 0);
    }
}
