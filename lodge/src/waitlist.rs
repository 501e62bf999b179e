//! Waitlist management for sold-out units.

use chrono::NaiveDate;

use crate::availability::check_availability;
use crate::domain::{AuditLogEntry, WaitlistEntry};
use crate::error::Result;
use crate::store::RecordStore;

/// Adds a customer to the waitlist for a unit.
///
/// The unit and customer ids are recorded as given; existence is not
/// checked, matching reservation add-ons.
///
/// # Errors
///
/// Returns a validation error if the desired range is empty or
/// inverted, and propagates storage errors.
pub fn add_to_waitlist<S: RecordStore>(
    store: &mut S,
    unit_id: &str,
    customer_id: &str,
    desired_check_in: NaiveDate,
    desired_check_out: NaiveDate,
) -> Result<WaitlistEntry> {
    let entry = WaitlistEntry::new(unit_id, customer_id, desired_check_in, desired_check_out)?;
    store.save_waitlist_entry(&entry)?;
    store.save_audit_entry(&AuditLogEntry::new(
        "waitlist_joined",
        [("waitlist_id", entry.id.as_str())],
    ))?;
    Ok(entry)
}

/// Returns the waitlist entries whose desired dates have become free.
///
/// Only entries not yet marked as notified are considered; an entry
/// qualifies when no confirmed reservation overlaps its desired range.
/// The entries themselves are not mutated.
///
/// # Errors
///
/// Propagates storage errors.
pub fn waitlist_notifications<S: RecordStore>(store: &S) -> Result<Vec<WaitlistEntry>> {
    let mut ready = Vec::new();
    for entry in store.list_waitlist_entries()? {
        if entry.notified {
            continue;
        }
        if check_availability(
            store,
            &entry.unit_id,
            entry.desired_check_in,
            entry.desired_check_out,
        )? {
            ready.push(entry);
        }
    }
    Ok(ready)
}
