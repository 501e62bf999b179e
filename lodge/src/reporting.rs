//! Revenue reporting.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::PaymentStatus;
use crate::error::Result;
use crate::store::RecordStore;

/// Sums paid payments per currency for a property over `[start, end]`.
///
/// A payment counts when its reservation belongs to one of the
/// property's units and is still confirmed, its status is paid, and
/// its settlement day falls within the inclusive date window.
///
/// # Errors
///
/// Propagates storage errors.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use lodge::{revenue_summary, SqliteStore, StoreConfig};
///
/// let store = SqliteStore::open(StoreConfig::new("/tmp/lodge.db")).unwrap();
/// let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
/// let totals = revenue_summary(&store, "prop-1", start, end).unwrap();
/// ```
pub fn revenue_summary<S: RecordStore>(
    store: &S,
    property_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<BTreeMap<String, f64>> {
    let unit_ids: Vec<String> = store
        .units_for_property(property_id)?
        .into_iter()
        .map(|unit| unit.id)
        .collect();
    let reservation_ids: Vec<String> = store
        .list_reservations()?
        .into_iter()
        .filter(|res| res.is_confirmed() && unit_ids.contains(&res.unit_id))
        .map(|res| res.id)
        .collect();

    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for payment in store.list_payments()? {
        if payment.status != PaymentStatus::Paid {
            continue;
        }
        let Some(paid_at) = payment.paid_at else {
            continue;
        };
        let day = paid_at.date_naive();
        if day < start || day > end {
            continue;
        }
        if !reservation_ids.contains(&payment.reservation_id) {
            continue;
        }
        *totals.entry(payment.currency).or_insert(0.0) += payment.amount;
    }
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::{Customer, Payment, Property, Reservation, ReservationStatus, Unit};
    use crate::store::{SqliteStore, StoreConfig};
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Fixture {
        store: SqliteStore,
        property: Property,
        reservation: Reservation,
    }

    fn fixture(dir: &tempfile::TempDir) -> Fixture {
        let mut store = SqliteStore::open(StoreConfig::new(dir.path().join("lodge.db"))).unwrap();
        let customer = Customer::new("Anna Novak", "anna@example.com", None).unwrap();
        let property = Property::new("Hotel Central", "1 Main St", None).unwrap();
        let unit = Unit::new(&property.id, "Deluxe Room", 2, 120.0, vec![]).unwrap();
        let reservation =
            Reservation::builder(&customer.id, &unit.id, date(2024, 6, 1), date(2024, 6, 5))
                .build()
                .unwrap();
        store.save_customer(&customer).unwrap();
        store.save_property(&property).unwrap();
        store.save_unit(&unit).unwrap();
        store.save_reservation(&reservation).unwrap();
        Fixture {
            store,
            property,
            reservation,
        }
    }

    fn paid_payment(reservation_id: &str, amount: f64, currency: &str, day: NaiveDate) -> Payment {
        let mut payment = Payment::new(reservation_id, amount, currency);
        payment.mark_paid("txn");
        payment.paid_at = Some(
            Utc.from_utc_datetime(&day.and_hms_opt(12, 0, 0).unwrap()),
        );
        payment
    }

    #[test]
    fn test_revenue_sums_per_currency() {
        let dir = tempdir().unwrap();
        let mut fx = fixture(&dir);

        fx.store
            .save_payment(&paid_payment(&fx.reservation.id, 300.0, "USD", date(2024, 6, 2)))
            .unwrap();
        fx.store
            .save_payment(&paid_payment(&fx.reservation.id, 100.0, "USD", date(2024, 6, 3)))
            .unwrap();
        fx.store
            .save_payment(&paid_payment(&fx.reservation.id, 50.0, "EUR", date(2024, 6, 3)))
            .unwrap();

        let totals =
            revenue_summary(&fx.store, &fx.property.id, date(2024, 6, 1), date(2024, 6, 30))
                .unwrap();
        assert_eq!(totals["USD"], 400.0);
        assert_eq!(totals["EUR"], 50.0);
    }

    #[test]
    fn test_revenue_window_is_inclusive() {
        let dir = tempdir().unwrap();
        let mut fx = fixture(&dir);

        fx.store
            .save_payment(&paid_payment(&fx.reservation.id, 10.0, "USD", date(2024, 6, 1)))
            .unwrap();
        fx.store
            .save_payment(&paid_payment(&fx.reservation.id, 20.0, "USD", date(2024, 6, 30)))
            .unwrap();
        fx.store
            .save_payment(&paid_payment(&fx.reservation.id, 40.0, "USD", date(2024, 7, 1)))
            .unwrap();

        let totals =
            revenue_summary(&fx.store, &fx.property.id, date(2024, 6, 1), date(2024, 6, 30))
                .unwrap();
        assert_eq!(totals["USD"], 30.0);
    }

    #[test]
    fn test_revenue_skips_pending_payments() {
        let dir = tempdir().unwrap();
        let mut fx = fixture(&dir);

        fx.store
            .save_payment(&Payment::new(&fx.reservation.id, 500.0, "USD"))
            .unwrap();

        let totals =
            revenue_summary(&fx.store, &fx.property.id, date(2024, 6, 1), date(2024, 6, 30))
                .unwrap();
        assert!(totals.is_empty());
    }

    #[test]
    fn test_revenue_skips_cancelled_reservations() {
        let dir = tempdir().unwrap();
        let mut fx = fixture(&dir);

        fx.store
            .save_payment(&paid_payment(&fx.reservation.id, 500.0, "USD", date(2024, 6, 2)))
            .unwrap();

        let mut cancelled = fx.reservation.clone();
        cancelled.status = ReservationStatus::Cancelled;
        fx.store.replace_reservations(&[cancelled]).unwrap();

        let totals =
            revenue_summary(&fx.store, &fx.property.id, date(2024, 6, 1), date(2024, 6, 30))
                .unwrap();
        assert!(totals.is_empty());
    }

    #[test]
    fn test_revenue_unknown_property_is_empty() {
        let dir = tempdir().unwrap();
        let mut fx = fixture(&dir);
        fx.store
            .save_payment(&paid_payment(&fx.reservation.id, 500.0, "USD", date(2024, 6, 2)))
            .unwrap();

        let totals =
            revenue_summary(&fx.store, "missing", date(2024, 6, 1), date(2024, 6, 30)).unwrap();
        assert!(totals.is_empty());
    }
}
