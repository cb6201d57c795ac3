//! Shared fixtures for unit tests.

use rust_decimal::Decimal;

use crate::asset::{Asset, AssetCategory, NewAsset};
use crate::memory::{InMemoryResolver, InMemoryStore};
use crate::store::LifecycleStore;
use crate::types::{Date, DbId};

pub fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd_opt(y, m, d).unwrap()
}

/// Companies 1 (Acme) and 2 (Globex); locations 10 and 11 belong to Acme,
/// 20 to Globex.
pub fn seeded_resolver() -> InMemoryResolver {
    let resolver = InMemoryResolver::new();
    resolver.add_company(1, "Acme");
    resolver.add_company(2, "Globex");
    resolver.add_location(10, 1, "Acme HQ");
    resolver.add_location(11, 1, "Acme Depot");
    resolver.add_location(20, 2, "Globex Plant");
    resolver
}

pub async fn seed_asset(
    store: &InMemoryStore,
    company_id: DbId,
    location_id: Option<DbId>,
    department: &str,
    assigned: &str,
) -> Asset {
    store
        .insert_asset(&NewAsset {
            company_id,
            location_id,
            name: "Dell 18 Laptop".to_string(),
            category: AssetCategory::ItEquipment,
            department: Some(department.to_string()),
            assigned: Some(assigned.to_string()),
            purchase_price: Decimal::new(120000, 2),
            purchase_date: date(2025, 4, 15),
        })
        .await
        .unwrap()
}
