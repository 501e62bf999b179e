//! Supporting record types: waitlist entries, audit log, inventory snapshots.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{generate_id, ValidationError};

/// A customer waiting for availability on a sold-out unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    /// Generated identifier.
    pub id: String,
    /// Identifier of the desired unit.
    pub unit_id: String,
    /// Identifier of the waiting customer.
    pub customer_id: String,
    /// Desired first night.
    pub desired_check_in: NaiveDate,
    /// Desired departure day (exclusive).
    pub desired_check_out: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Whether the customer has already been notified of a freed slot.
    pub notified: bool,
}

impl WaitlistEntry {
    /// Creates a new waitlist entry with `notified = false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the desired range is empty or inverted.
    pub fn new(
        unit_id: impl Into<String>,
        customer_id: impl Into<String>,
        desired_check_in: NaiveDate,
        desired_check_out: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if desired_check_in >= desired_check_out {
            return Err(ValidationError::new(
                "desired_check_out",
                "must be after the desired check-in date",
            ));
        }

        Ok(Self {
            id: generate_id(),
            unit_id: unit_id.into(),
            customer_id: customer_id.into(),
            desired_check_in,
            desired_check_out,
            created_at: Utc::now(),
            notified: false,
        })
    }
}

/// An append-only record of a domain event.
///
/// Audit entries are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Generated identifier.
    pub id: String,
    /// Event discriminator, for example `reservation_created`.
    pub event_type: String,
    /// Event details as string key/value pairs.
    pub payload: BTreeMap<String, String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl AuditLogEntry {
    /// Creates a new audit entry from key/value payload pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::AuditLogEntry;
    ///
    /// let entry = AuditLogEntry::new("reservation_created", [("reservation_id", "res-1")]);
    /// assert_eq!(entry.payload["reservation_id"], "res-1");
    /// ```
    pub fn new<'a>(
        event_type: impl Into<String>,
        payload: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            id: generate_id(),
            event_type: event_type.into(),
            payload: payload
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            created_at: Utc::now(),
        }
    }
}

/// A cached per-day availability snapshot for a unit.
///
/// Snapshots are an optional optimization hook; correctness never
/// depends on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    /// Generated identifier.
    pub id: String,
    /// Identifier of the snapshotted unit.
    pub unit_id: String,
    /// The day this snapshot describes.
    pub date: NaiveDate,
    /// Whether the unit was available on `date` when generated.
    pub is_available: bool,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}

impl InventorySnapshot {
    /// Creates a new snapshot stamped with the current time.
    #[must_use]
    pub fn new(unit_id: impl Into<String>, date: NaiveDate, is_available: bool) -> Self {
        Self {
            id: generate_id(),
            unit_id: unit_id.into(),
            date,
            is_available,
            generated_at: Utc::now(),
        }
    }
}
