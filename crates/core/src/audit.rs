//! Read side of the audit ledger.

use crate::asset::Placement;
use crate::error::CoreError;
use crate::ledger::{placement_at, AssetDisposal, AssetTransfer};
use crate::store::{LifecycleStore, Page};
use crate::types::{Date, DbId};

pub struct AuditLedger<'a> {
    store: &'a dyn LifecycleStore,
}

impl<'a> AuditLedger<'a> {
    pub fn new(store: &'a dyn LifecycleStore) -> Self {
        Self { store }
    }

    async fn ensure_asset(&self, asset_id: DbId) -> Result<(), CoreError> {
        if self.store.find_asset(asset_id).await?.is_none() {
            return Err(CoreError::not_found("Asset", asset_id));
        }
        Ok(())
    }

    /// Every transfer of an asset, oldest first.
    pub async fn transfers_for_asset(
        &self,
        asset_id: DbId,
    ) -> Result<Vec<AssetTransfer>, CoreError> {
        self.ensure_asset(asset_id).await?;
        self.store.list_transfers(asset_id).await
    }

    pub async fn disposal_for_asset(
        &self,
        asset_id: DbId,
    ) -> Result<Option<AssetDisposal>, CoreError> {
        self.ensure_asset(asset_id).await?;
        self.store.find_disposal(asset_id).await
    }

    pub async fn transfers_for_company(
        &self,
        company_id: DbId,
        page: Page,
    ) -> Result<Vec<AssetTransfer>, CoreError> {
        self.store.list_company_transfers(company_id, page).await
    }

    /// Who had the asset, and where, at the end of `date`.
    pub async fn placement_at(&self, asset_id: DbId, date: Date) -> Result<Placement, CoreError> {
        let asset = self
            .store
            .find_asset(asset_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Asset", asset_id))?;
        let transfers = self.store.list_transfers(asset_id).await?;
        Ok(placement_at(&asset, &transfers, date))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::memory::InMemoryStore;
    use crate::test_fixtures::{date, seed_asset, seeded_resolver};
    use crate::workflow::{TransferRequest, TransferWorkflow};

    fn move_to(asset: DbId, location: DbId, dept: &str, who: &str, day: u32) -> TransferRequest {
        TransferRequest {
            asset,
            to_location: location,
            to_department: dept.to_string(),
            to_assigned: who.to_string(),
            transferred_by: "Kevin".to_string(),
            transfer_date: date(2025, 5, day),
            note: None,
        }
    }

    #[tokio::test]
    async fn test_history_and_placement_reconstruction() {
        let store = InMemoryStore::new();
        let resolver = seeded_resolver();
        let asset = seed_asset(&store, 1, Some(10), "Finance", "Jane").await;
        let workflow = TransferWorkflow::new(&store, &resolver);

        workflow
            .transfer(&move_to(asset.id, 11, "Ops", "Tom", 10))
            .await
            .unwrap();
        workflow
            .transfer(&move_to(asset.id, 10, "Legal", "Ana", 20))
            .await
            .unwrap();

        let ledger = AuditLedger::new(&store);
        let history = ledger.transfers_for_asset(asset.id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].to_department, "Ops");
        assert_eq!(history[1].from_department.as_deref(), Some("Ops"));

        let p = ledger.placement_at(asset.id, date(2025, 5, 1)).await.unwrap();
        assert_eq!(p.assigned.as_deref(), Some("Jane"));
        let p = ledger.placement_at(asset.id, date(2025, 5, 15)).await.unwrap();
        assert_eq!(p.assigned.as_deref(), Some("Tom"));
        let p = ledger.placement_at(asset.id, date(2025, 6, 1)).await.unwrap();
        assert_eq!(p.assigned.as_deref(), Some("Ana"));

        let company = ledger.transfers_for_company(1, Page::default()).await.unwrap();
        assert_eq!(company.len(), 2);
        assert!(company[0].id > company[1].id, "newest first");
        assert!(ledger
            .transfers_for_company(2, Page::default())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_reads_on_missing_asset_are_not_found() {
        let store = InMemoryStore::new();
        let ledger = AuditLedger::new(&store);

        assert_matches!(
            ledger.transfers_for_asset(5).await,
            Err(CoreError::NotFound { .. })
        );
        assert_matches!(
            ledger.disposal_for_asset(5).await,
            Err(CoreError::NotFound { .. })
        );
        assert_matches!(
            ledger.placement_at(5, date(2025, 1, 1)).await,
            Err(CoreError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn test_no_disposal_is_none() {
        let store = InMemoryStore::new();
        let asset = seed_asset(&store, 1, None, "Finance", "Jane").await;
        let ledger = AuditLedger::new(&store);

        assert!(ledger.disposal_for_asset(asset.id).await.unwrap().is_none());
    }
}
