//! Two store handles on one database file: lock discipline and
//! cross-handle visibility of committed state.

mod common;

use std::time::Duration;

use common::{d, seed_inventory};
use lodge::{
    BookingRequest, BookingService, Error, RecordStore, Reservation, ReservationStatus,
    SqliteStore, StoreConfig,
};

/// Opens a second handle on the same file with a short lock wait, so a
/// blocked write fails quickly instead of stalling the test.
fn open_second_handle(path: &std::path::Path) -> SqliteStore {
    SqliteStore::open(StoreConfig::new(path).with_busy_timeout(Duration::from_millis(100)))
        .unwrap()
}

#[test]
fn test_writer_blocked_during_exclusive_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lodge.db");

    let mut store_a = SqliteStore::open(StoreConfig::new(&path)).unwrap();
    let inventory = seed_inventory(&mut store_a);
    let mut store_b = open_second_handle(&path);

    let mut held = Reservation::builder(
        &inventory.customer.id,
        &inventory.deluxe.id,
        d(2024, 6, 1),
        d(2024, 6, 5),
    )
    .build()
    .unwrap();
    store_a.save_reservation(&held).unwrap();

    let late = Reservation::builder(
        &inventory.customer.id,
        &inventory.suite.id,
        d(2024, 6, 1),
        d(2024, 6, 3),
    )
    .build()
    .unwrap();

    // Replay a read-then-rewrite sequence inside the exclusive section
    // and try to sneak a second writer's insert in between.
    store_a
        .exclusive(|store| {
            let mut reservation = store.find_reservation(&held.id).unwrap().unwrap();

            let blocked = store_b.save_reservation(&late).unwrap_err();
            assert!(matches!(blocked, Error::Storage(_)));

            reservation.status = ReservationStatus::Cancelled;
            store.update_reservation(&reservation)
        })
        .unwrap();
    held.status = ReservationStatus::Cancelled;

    // Once the section commits, the second writer goes through.
    store_b.save_reservation(&late).unwrap();

    let fresh = SqliteStore::open(StoreConfig::new(&path)).unwrap();
    let listed = fresh.list_reservations().unwrap();
    assert_eq!(listed, vec![held, late]);
}

#[test]
fn test_admission_blocked_by_exclusive_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lodge.db");

    let mut store_a = SqliteStore::open(StoreConfig::new(&path)).unwrap();
    let inventory = seed_inventory(&mut store_a);
    let mut service_b = BookingService::new(open_second_handle(&path));

    store_a
        .exclusive(|_store| {
            let blocked = service_b
                .create_reservation(BookingRequest::new(
                    &inventory.customer.id,
                    &inventory.deluxe.id,
                    d(2024, 6, 1),
                    d(2024, 6, 5),
                    2,
                ))
                .unwrap_err();
            assert!(matches!(blocked, Error::Storage(_)));
            Ok(())
        })
        .unwrap();

    // The lock is released, so the same admission now succeeds.
    service_b
        .create_reservation(BookingRequest::new(
            &inventory.customer.id,
            &inventory.deluxe.id,
            d(2024, 6, 1),
            d(2024, 6, 5),
            2,
        ))
        .unwrap();
}

#[test]
fn test_conflicting_admissions_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lodge.db");

    let mut store_a = SqliteStore::open(StoreConfig::new(&path)).unwrap();
    let inventory = seed_inventory(&mut store_a);

    let mut service_a = BookingService::new(store_a);
    let mut service_b = BookingService::new(open_second_handle(&path));

    service_a
        .create_reservation(BookingRequest::new(
            &inventory.customer.id,
            &inventory.deluxe.id,
            d(2024, 6, 1),
            d(2024, 6, 5),
            2,
        ))
        .unwrap();

    // The second handle sees the committed admission and rejects the overlap.
    let overlapping = service_b.create_reservation(BookingRequest::new(
        &inventory.customer.id,
        &inventory.deluxe.id,
        d(2024, 6, 4),
        d(2024, 6, 8),
        1,
    ));
    assert!(overlapping.unwrap_err().is_conflict());
}

#[test]
fn test_cancel_preserves_other_handles_reservations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lodge.db");

    let mut store_a = SqliteStore::open(StoreConfig::new(&path)).unwrap();
    let inventory = seed_inventory(&mut store_a);

    let mut service_a = BookingService::new(store_a);
    let mut service_b = BookingService::new(open_second_handle(&path));

    let first = service_a
        .create_reservation(BookingRequest::new(
            &inventory.customer.id,
            &inventory.deluxe.id,
            d(2024, 6, 1),
            d(2024, 6, 5),
            2,
        ))
        .unwrap();
    let second = service_b
        .create_reservation(BookingRequest::new(
            &inventory.customer.id,
            &inventory.deluxe.id,
            d(2024, 6, 10),
            d(2024, 6, 12),
            1,
        ))
        .unwrap();

    assert!(service_a.cancel_reservation(&first.id).unwrap());

    let fresh = SqliteStore::open(StoreConfig::new(&path)).unwrap();
    let reloaded = fresh.find_reservation(&second.id).unwrap();
    assert_eq!(reloaded.unwrap().status, ReservationStatus::Confirmed);
    assert_eq!(
        fresh.find_reservation(&first.id).unwrap().unwrap().status,
        ReservationStatus::Cancelled
    );
    assert_eq!(fresh.list_reservations().unwrap().len(), 2);
}
