//! The persistence seam: the [`RecordStore`] contract and its SQLite
//! implementation.
//!
//! Core logic never touches the storage format directly; it speaks this
//! trait. Each entity type gets durable keyed collections with
//! list/find/save operations; reservations and payments additionally
//! support targeted single-record rewrites and whole-collection
//! replacement.

mod config;
mod schema;
mod sqlite;

pub use config::StoreConfig;
pub use sqlite::SqliteStore;

use crate::domain::{
    AddOn, AuditLogEntry, Customer, InventorySnapshot, Payment, Property, RatePlan, Reservation,
    Unit, WaitlistEntry,
};
use crate::error::Result;

/// Durable keyed collections per entity type.
///
/// `save_*` appends a record whose id was assigned at construction.
/// In-place mutation goes through targeted single-record writes
/// (`update_reservation`, `upsert_payment`); `replace_*` overwrites a
/// whole collection and exists for bulk rewrites only. Mutating methods
/// take `&mut self`, so a single owner serializes writes;
/// [`RecordStore::exclusive`] additionally makes a read-check-write
/// sequence atomic against other processes sharing the same store.
pub trait RecordStore {
    /// Lists all customers in insertion order.
    fn list_customers(&self) -> Result<Vec<Customer>>;
    /// Finds a customer by id.
    fn find_customer(&self, id: &str) -> Result<Option<Customer>>;
    /// Appends a customer.
    fn save_customer(&mut self, customer: &Customer) -> Result<()>;

    /// Lists all properties in insertion order.
    fn list_properties(&self) -> Result<Vec<Property>>;
    /// Finds a property by id.
    fn find_property(&self, id: &str) -> Result<Option<Property>>;
    /// Appends a property.
    fn save_property(&mut self, property: &Property) -> Result<()>;

    /// Lists all units in insertion order.
    fn list_units(&self) -> Result<Vec<Unit>>;
    /// Finds a unit by id.
    fn find_unit(&self, id: &str) -> Result<Option<Unit>>;
    /// Appends a unit.
    fn save_unit(&mut self, unit: &Unit) -> Result<()>;

    /// Lists the units belonging to a property.
    fn units_for_property(&self, property_id: &str) -> Result<Vec<Unit>> {
        Ok(self
            .list_units()?
            .into_iter()
            .filter(|unit| unit.property_id == property_id)
            .collect())
    }

    /// Lists all add-ons in insertion order.
    fn list_addons(&self) -> Result<Vec<AddOn>>;
    /// Appends an add-on.
    fn save_addon(&mut self, addon: &AddOn) -> Result<()>;

    /// Lists all rate plans in insertion order.
    fn list_rate_plans(&self) -> Result<Vec<RatePlan>>;
    /// Appends a rate plan.
    fn save_rate_plan(&mut self, plan: &RatePlan) -> Result<()>;

    /// Lists the rate plans priced for a unit.
    fn rate_plans_for_unit(&self, unit_id: &str) -> Result<Vec<RatePlan>> {
        Ok(self
            .list_rate_plans()?
            .into_iter()
            .filter(|plan| plan.unit_id == unit_id)
            .collect())
    }

    /// Lists all reservations in insertion order.
    fn list_reservations(&self) -> Result<Vec<Reservation>>;
    /// Finds a reservation by id.
    fn find_reservation(&self, id: &str) -> Result<Option<Reservation>>;
    /// Appends a reservation.
    fn save_reservation(&mut self, reservation: &Reservation) -> Result<()>;
    /// Rewrites the stored reservation with the matching id.
    ///
    /// This is a single-row write and must be safe to call inside
    /// [`RecordStore::exclusive`]; other reservations are untouched.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no reservation has that id.
    fn update_reservation(&mut self, reservation: &Reservation) -> Result<()>;
    /// Overwrites the reservation collection.
    fn replace_reservations(&mut self, reservations: &[Reservation]) -> Result<()>;

    /// Lists the reservations (any status) for a unit.
    fn reservations_for_unit(&self, unit_id: &str) -> Result<Vec<Reservation>> {
        Ok(self
            .list_reservations()?
            .into_iter()
            .filter(|reservation| reservation.unit_id == unit_id)
            .collect())
    }

    /// Lists all payments in insertion order.
    fn list_payments(&self) -> Result<Vec<Payment>>;
    /// Finds a payment by id.
    fn find_payment(&self, id: &str) -> Result<Option<Payment>>;
    /// Appends a payment.
    fn save_payment(&mut self, payment: &Payment) -> Result<()>;
    /// Overwrites the payment collection.
    fn replace_payments(&mut self, payments: &[Payment]) -> Result<()>;
    /// Replaces a payment by id, appending if absent.
    fn upsert_payment(&mut self, payment: &Payment) -> Result<()>;

    /// Lists all waitlist entries in insertion order.
    fn list_waitlist_entries(&self) -> Result<Vec<WaitlistEntry>>;
    /// Appends a waitlist entry.
    fn save_waitlist_entry(&mut self, entry: &WaitlistEntry) -> Result<()>;

    /// Lists the waitlist entries for a unit.
    fn waitlist_for_unit(&self, unit_id: &str) -> Result<Vec<WaitlistEntry>> {
        Ok(self
            .list_waitlist_entries()?
            .into_iter()
            .filter(|entry| entry.unit_id == unit_id)
            .collect())
    }

    /// Lists the audit log in insertion order.
    fn list_audit_log(&self) -> Result<Vec<AuditLogEntry>>;
    /// Appends an audit entry. The log is append-only.
    fn save_audit_entry(&mut self, entry: &AuditLogEntry) -> Result<()>;

    /// Lists all inventory snapshots in insertion order.
    fn list_inventory_snapshots(&self) -> Result<Vec<InventorySnapshot>>;
    /// Appends an inventory snapshot.
    fn save_inventory_snapshot(&mut self, snapshot: &InventorySnapshot) -> Result<()>;

    /// Runs `f` as one atomic unit against the store.
    ///
    /// Implementations back this with a write transaction (or
    /// equivalent), so that a read-check-write sequence such as
    /// reservation admission control or cancellation cannot interleave
    /// with another writer. If `f` fails, none of its writes are kept.
    ///
    /// The default implementation simply calls `f` and provides NO
    /// isolation and NO rollback. It is only correct for stores that
    /// can never see a second writer; any implementation backed by
    /// shared storage must override it.
    ///
    /// # Errors
    ///
    /// Propagates errors from `f` and from the underlying transaction
    /// machinery.
    fn exclusive<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T>
    where
        Self: Sized,
    {
        f(self)
    }
}
