//! Availability checks and occupancy reporting.
//!
//! All date ranges here are half-open: a reservation's check-out day is
//! free for the next guest. Only confirmed reservations constrain
//! availability; cancelled ones are ignored everywhere.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::store::RecordStore;

/// Availability state of a unit on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// No confirmed reservation covers the day.
    Available,
    /// A confirmed reservation covers the day.
    Occupied,
}

impl DayStatus {
    /// Returns the lowercase string form used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
        }
    }
}

/// Unit counts for a single day of an occupancy report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayOccupancy {
    /// Units covered by a confirmed reservation.
    pub occupied: usize,
    /// Units free to book.
    pub available: usize,
}

/// Checks whether `unit_id` is free over the half-open range
/// `[check_in, check_out)`.
///
/// The unit itself is not looked up; an unknown unit simply has no
/// reservations and reports as available.
///
/// # Errors
///
/// Returns a validation error if the range is empty or inverted, and
/// propagates storage errors.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use lodge::{check_availability, SqliteStore, StoreConfig};
///
/// let store = SqliteStore::open(StoreConfig::new("/tmp/lodge.db")).unwrap();
/// let check_in = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
/// let free = check_availability(&store, "unit-1", check_in, check_out).unwrap();
/// ```
pub fn check_availability<S: RecordStore>(
    store: &S,
    unit_id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<bool> {
    if check_in >= check_out {
        return Err(Error::Validation {
            field: "check_out".to_string(),
            message: "must be after the check-in date".to_string(),
        });
    }

    for reservation in store.reservations_for_unit(unit_id)? {
        if reservation.is_confirmed() && reservation.overlaps(check_in, check_out) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Finds the first day on or after `after` that is not covered by any
/// confirmed reservation of `unit_id`.
///
/// Walks forward by jumping to the check-out day of each conflicting
/// reservation, so it terminates after at most one jump per
/// reservation.
///
/// # Errors
///
/// Propagates storage errors.
pub fn next_available_date<S: RecordStore>(
    store: &S,
    unit_id: &str,
    after: NaiveDate,
) -> Result<NaiveDate> {
    let mut reservations: Vec<_> = store
        .reservations_for_unit(unit_id)?
        .into_iter()
        .filter(crate::domain::Reservation::is_confirmed)
        .collect();
    reservations.sort_by_key(|reservation| reservation.check_in);

    let mut current = after;
    loop {
        match reservations.iter().find(|res| res.covers(current)) {
            Some(conflict) => current = conflict.check_out,
            None => return Ok(current),
        }
    }
}

/// Builds a per-day occupancy report for a property over the half-open
/// range `[start, end)`.
///
/// Each day maps to the number of occupied and available units across
/// the whole property. An unknown property yields an empty unit set and
/// therefore all-zero counts.
///
/// # Errors
///
/// Propagates storage errors.
pub fn occupancy_report<S: RecordStore>(
    store: &S,
    property_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<BTreeMap<NaiveDate, DayOccupancy>> {
    let units = store.units_for_property(property_id)?;
    let unit_ids: Vec<&str> = units.iter().map(|unit| unit.id.as_str()).collect();

    let mut report = BTreeMap::new();
    for day in date_range(start, end) {
        report.insert(
            day,
            DayOccupancy {
                occupied: 0,
                available: units.len(),
            },
        );
    }

    for reservation in store.list_reservations()? {
        if !reservation.is_confirmed() || !unit_ids.contains(&reservation.unit_id.as_str()) {
            continue;
        }
        for day in date_range(reservation.check_in, reservation.check_out) {
            if let Some(entry) = report.get_mut(&day) {
                entry.occupied += 1;
                entry.available = entry.available.saturating_sub(1);
            }
        }
    }

    Ok(report)
}

/// Builds a per-unit availability calendar for one month.
///
/// The outer map is keyed by unit name, the inner map by day; every day
/// of the month appears with either [`DayStatus::Available`] or
/// [`DayStatus::Occupied`].
///
/// # Errors
///
/// Returns a validation error if `month` is not a real month, and
/// propagates storage errors.
pub fn availability_calendar<S: RecordStore>(
    store: &S,
    property_id: &str,
    month: u32,
    year: i32,
) -> Result<BTreeMap<String, BTreeMap<NaiveDate, DayStatus>>> {
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| Error::Validation {
        field: "month".to_string(),
        message: format!("{year}-{month} is not a valid month"),
    })?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| Error::Validation {
        field: "year".to_string(),
        message: format!("{year} is out of the supported range"),
    })?;

    let mut calendar = BTreeMap::new();
    for unit in store.units_for_property(property_id)? {
        let mut days: BTreeMap<NaiveDate, DayStatus> = date_range(start, end)
            .map(|day| (day, DayStatus::Available))
            .collect();

        for reservation in store.reservations_for_unit(&unit.id)? {
            if !reservation.is_confirmed() {
                continue;
            }
            for day in date_range(reservation.check_in, reservation.check_out) {
                if day >= start && day < end {
                    days.insert(day, DayStatus::Occupied);
                }
            }
        }
        calendar.insert(unit.name, days);
    }

    Ok(calendar)
}

/// Iterates the half-open day range `[start, end)`.
fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day < end)
}

#[cfg(test)]
mod proptests;
