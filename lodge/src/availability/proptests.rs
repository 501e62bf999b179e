//! Property-based tests for availability and pricing arithmetic.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use tempfile::tempdir;

use super::{check_availability, next_available_date};
use crate::domain::{RatePlan, Reservation};
use crate::store::{RecordStore, SqliteStore, StoreConfig};

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset)
}

// Strategy for a non-empty half-open day interval within a small window
fn interval_strategy() -> impl Strategy<Value = (i64, i64)> {
    (0i64..60, 1i64..14).prop_map(|(start, len)| (start, start + len))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // Interval overlap agrees with a brute-force day scan
    #[test]
    fn overlap_matches_day_scan((a, b) in interval_strategy(), (c, d) in interval_strategy()) {
        let reservation = Reservation::builder("cust", "unit", day(a), day(b))
            .build()
            .unwrap();

        let scanned = (c..d).any(|offset| reservation.covers(day(offset)));
        prop_assert_eq!(reservation.overlaps(day(c), day(d)), scanned);
    }

    // A longer stay never costs less than a shorter one
    #[test]
    fn price_monotonic_in_nights(
        base_price in 0.0f64..500.0,
        surcharge in 0.0f64..100.0,
        start in 0i64..60,
        short in 1i64..14,
        extra in 0i64..14
    ) {
        let plan = RatePlan::new("unit", "Standard", base_price, 1, None, surcharge).unwrap();
        let shorter = plan.price_for(day(start), day(start + short)).unwrap();
        let longer = plan.price_for(day(start), day(start + short + extra)).unwrap();
        prop_assert!(longer >= shorter - 1e-9);
    }

    // The suggested date is at or after the requested one and is free
    #[test]
    fn next_available_is_free(
        stays in prop::collection::vec(interval_strategy(), 0..6),
        after in 0i64..60
    ) {
        let dir = tempdir().unwrap();
        let mut store = SqliteStore::open(StoreConfig::new(dir.path().join("lodge.db"))).unwrap();
        for (start, end) in stays {
            let reservation = Reservation::builder("cust", "unit", day(start), day(end))
                .build()
                .unwrap();
            store.save_reservation(&reservation).unwrap();
        }

        let next = next_available_date(&store, "unit", day(after)).unwrap();
        prop_assert!(next >= day(after));
        prop_assert!(check_availability(&store, "unit", next, next + Duration::days(1)).unwrap());
    }
}
