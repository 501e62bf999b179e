//! Common test utilities for integration tests.

use chrono::NaiveDate;
use tempfile::TempDir;

use lodge::{Customer, Property, RecordStore, SqliteStore, StoreConfig, Unit};

/// Opens a fresh store in a temporary directory.
///
/// The directory must be kept alive for as long as the store is used.
pub fn test_store() -> (TempDir, SqliteStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = SqliteStore::open(StoreConfig::new(dir.path().join("lodge.db")))
        .expect("open test store");
    (dir, store)
}

/// Shorthand for building a date in tests.
pub fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Seeded inventory shared by the integration suites.
pub struct Inventory {
    pub customer: Customer,
    pub property: Property,
    pub deluxe: Unit,
    pub suite: Unit,
}

/// Seeds a customer and a two-unit property.
pub fn seed_inventory(store: &mut SqliteStore) -> Inventory {
    let customer = Customer::new("Anna Novak", "anna@example.com", None).expect("valid customer");
    let property =
        Property::new("Hotel Central", "123 Main Street, Prague", None).expect("valid property");
    let deluxe = Unit::new(&property.id, "Deluxe Room", 2, 120.0, vec![]).expect("valid unit");
    let suite = Unit::new(&property.id, "Executive Suite", 4, 250.0, vec![]).expect("valid unit");

    store.save_customer(&customer).expect("save customer");
    store.save_property(&property).expect("save property");
    store.save_unit(&deluxe).expect("save unit");
    store.save_unit(&suite).expect("save unit");

    Inventory {
        customer,
        property,
        deluxe,
        suite,
    }
}
