//! Permanent retirement of an asset.

use serde::Deserialize;

use crate::error::CoreError;
use crate::ledger::{AssetDisposal, DisposalMethod, NewAssetDisposal};
use crate::lifecycle::{check_transition, LifecycleAction};
use crate::reference::{resolve_owner, ReferenceResolver};
use crate::store::LifecycleStore;
use crate::types::{check_money, Date, DbId, Money};

use super::{load_current, load_locked, require_actor};

/// Input for [`DisposalWorkflow::dispose`]. `method` is kept raw and parsed
/// before the store is touched.
#[derive(Debug, Clone, Deserialize)]
pub struct DisposalRequest {
    /// Internal key of the asset.
    pub asset: DbId,
    pub method: String,
    pub disposal_date: Date,
    pub value_received: Money,
    pub note: Option<String>,
    pub approved_by: String,
}

pub struct DisposalWorkflow<'a> {
    store: &'a dyn LifecycleStore,
    resolver: &'a dyn ReferenceResolver,
}

impl<'a> DisposalWorkflow<'a> {
    pub fn new(store: &'a dyn LifecycleStore, resolver: &'a dyn ReferenceResolver) -> Self {
        Self { store, resolver }
    }

    /// Retire an asset. A second disposal of the same asset fails with
    /// `InvalidStateTransition` and records nothing.
    pub async fn dispose(&self, req: &DisposalRequest) -> Result<AssetDisposal, CoreError> {
        let method = DisposalMethod::parse(&req.method)?;
        check_money("value_received", req.value_received)?;
        let approved_by = require_actor("approved_by", &req.approved_by)?;

        let current = load_current(self.store, req.asset).await?;
        check_transition(current.id, current.status, LifecycleAction::Dispose)?;

        let company = resolve_owner(self.resolver, current.id, current.company_id).await?;

        let mut unit = self.store.begin().await?;
        let mut asset = load_locked(unit.as_mut(), req.asset).await?;

        let next_status = check_transition(asset.id, asset.status, LifecycleAction::Dispose)?;

        let record = unit
            .append_disposal(&NewAssetDisposal {
                asset_id: asset.id,
                company_id: company.map(|c| c.id),
                method,
                disposal_date: req.disposal_date,
                value_received: req.value_received,
                note: req.note.clone().unwrap_or_default(),
                approved_by,
            })
            .await?;

        asset.status = next_status;
        unit.save_asset(&asset).await?;
        unit.commit().await?;

        tracing::info!(
            asset_id = asset.id,
            public_id = %asset.asset_id,
            disposal_id = record.id,
            method = %record.method,
            value_received = %record.value_received,
            "Asset disposed",
        );

        Ok(record)
    }
}
