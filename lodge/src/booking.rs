//! Reservation and payment workflow.
//!
//! [`BookingService`] wraps a [`RecordStore`] and owns every mutation
//! of reservations and payments, including the audit trail. Admission
//! control runs inside [`RecordStore::exclusive`], so the availability
//! check and the reservation insert form one atomic unit even when
//! several processes share the store.

use chrono::NaiveDate;

use crate::availability::check_availability;
use crate::domain::{AuditLogEntry, Payment, Reservation};
use crate::error::{Error, Result};
use crate::store::RecordStore;

/// Parameters for creating a reservation.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// Identifier of the booking customer.
    pub customer_id: String,
    /// Identifier of the unit to reserve.
    pub unit_id: String,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Day of departure; not part of the stay.
    pub check_out: NaiveDate,
    /// Number of adults.
    pub adults: u32,
    /// Number of children.
    pub children: u32,
    /// Ids of add-ons to attach.
    pub addons: Vec<String>,
}

impl BookingRequest {
    /// Creates a request with no children and no add-ons.
    #[must_use]
    pub fn new(
        customer_id: impl Into<String>,
        unit_id: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
        adults: u32,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            unit_id: unit_id.into(),
            check_in,
            check_out,
            adults,
            children: 0,
            addons: Vec::new(),
        }
    }

    /// Sets the number of children.
    #[must_use]
    pub const fn with_children(mut self, children: u32) -> Self {
        self.children = children;
        self
    }

    /// Sets the add-on ids to attach.
    #[must_use]
    pub fn with_addons(mut self, addons: Vec<String>) -> Self {
        self.addons = addons;
        self
    }
}

/// The reservation workflow service.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use lodge::{BookingRequest, BookingService, SqliteStore, StoreConfig};
///
/// let store = SqliteStore::open(StoreConfig::new("/tmp/lodge.db")).unwrap();
/// let mut service = BookingService::new(store);
///
/// let request = BookingRequest::new(
///     "cust-1",
///     "unit-1",
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
///     2,
/// );
/// let reservation = service.create_reservation(request).unwrap();
/// ```
#[derive(Debug)]
pub struct BookingService<S> {
    store: S,
}

impl<S: RecordStore> BookingService<S> {
    /// Creates a service over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns a mutable reference to the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the service, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Creates a confirmed reservation after admission control.
    ///
    /// The customer and unit must exist and the unit must be free over
    /// the requested range. The availability check and the insert run
    /// inside one exclusive unit, so two competing requests for the
    /// same dates cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown customer or unit,
    /// [`Error::Conflict`] when the unit is already booked over the
    /// range, and a validation error for an invalid date range or
    /// guest count.
    pub fn create_reservation(&mut self, request: BookingRequest) -> Result<Reservation> {
        self.store.exclusive(|store| {
            if store.find_customer(&request.customer_id)?.is_none() {
                return Err(Error::NotFound {
                    resource: format!("customer {}", request.customer_id),
                });
            }
            if store.find_unit(&request.unit_id)?.is_none() {
                return Err(Error::NotFound {
                    resource: format!("unit {}", request.unit_id),
                });
            }
            if !check_availability(store, &request.unit_id, request.check_in, request.check_out)? {
                return Err(Error::Conflict {
                    details: format!(
                        "unit {} is not available from {} to {}",
                        request.unit_id, request.check_in, request.check_out
                    ),
                });
            }

            let reservation = Reservation::builder(
                &request.customer_id,
                &request.unit_id,
                request.check_in,
                request.check_out,
            )
            .adults(request.adults)
            .children(request.children)
            .addons(request.addons.clone())
            .build()?;

            store.save_reservation(&reservation)?;
            store.save_audit_entry(&AuditLogEntry::new(
                "reservation_created",
                [("reservation_id", reservation.id.as_str())],
            ))?;
            Ok(reservation)
        })
    }

    /// Cancels a reservation.
    ///
    /// Returns `false` when the reservation does not exist. Cancelling
    /// an already cancelled reservation returns `true` without writing
    /// a second audit entry.
    ///
    /// The read, the single-row status rewrite, and the audit append
    /// run inside one exclusive unit, so a writer on another store
    /// handle cannot slip a change in between.
    ///
    /// # Errors
    ///
    /// Propagates storage errors.
    pub fn cancel_reservation(&mut self, reservation_id: &str) -> Result<bool> {
        self.store.exclusive(|store| {
            let Some(mut reservation) = store.find_reservation(reservation_id)? else {
                return Ok(false);
            };
            if !reservation.is_confirmed() {
                return Ok(true);
            }

            reservation.status = crate::domain::ReservationStatus::Cancelled;
            store.update_reservation(&reservation)?;
            store.save_audit_entry(&AuditLogEntry::new(
                "reservation_cancelled",
                [("reservation_id", reservation_id)],
            ))?;
            Ok(true)
        })
    }

    /// Attaches a pending payment to a reservation.
    ///
    /// The amount is recorded as given; it is not checked against the
    /// quoted price of the stay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown reservation.
    pub fn attach_payment(
        &mut self,
        reservation_id: &str,
        amount: f64,
        currency: &str,
    ) -> Result<Payment> {
        if self.store.find_reservation(reservation_id)?.is_none() {
            return Err(Error::NotFound {
                resource: format!("reservation {reservation_id}"),
            });
        }

        let payment = Payment::new(reservation_id, amount, currency);
        self.store.save_payment(&payment)?;
        self.store.save_audit_entry(&AuditLogEntry::new(
            "payment_attached",
            [
                ("payment_id", payment.id.as_str()),
                ("reservation_id", reservation_id),
            ],
        ))?;
        Ok(payment)
    }

    /// Marks a payment as paid, recording the transaction reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown payment.
    pub fn mark_payment_paid(&mut self, payment_id: &str, reference: &str) -> Result<Payment> {
        let Some(mut payment) = self.store.find_payment(payment_id)? else {
            return Err(Error::NotFound {
                resource: format!("payment {payment_id}"),
            });
        };

        payment.mark_paid(reference);
        self.store.upsert_payment(&payment)?;
        self.store.save_audit_entry(&AuditLogEntry::new(
            "payment_marked_paid",
            [("payment_id", payment_id)],
        ))?;
        Ok(payment)
    }

    /// Refunds a paid payment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown payment and a
    /// validation error when the payment is not currently paid.
    pub fn mark_payment_refunded(&mut self, payment_id: &str) -> Result<Payment> {
        let Some(mut payment) = self.store.find_payment(payment_id)? else {
            return Err(Error::NotFound {
                resource: format!("payment {payment_id}"),
            });
        };

        payment.mark_refunded()?;
        self.store.upsert_payment(&payment)?;
        self.store.save_audit_entry(&AuditLogEntry::new(
            "payment_refunded",
            [("payment_id", payment_id)],
        ))?;
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Customer, PaymentStatus, Property, ReservationStatus, Unit};
    use crate::store::{SqliteStore, StoreConfig};
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded_service(dir: &tempfile::TempDir) -> (BookingService<SqliteStore>, Customer, Unit) {
        let mut store = SqliteStore::open(StoreConfig::new(dir.path().join("lodge.db"))).unwrap();
        let customer = Customer::new("Anna Novak", "anna@example.com", None).unwrap();
        let property = Property::new("Hotel Central", "1 Main St", None).unwrap();
        let unit = Unit::new(&property.id, "Deluxe Room", 2, 120.0, vec![]).unwrap();
        store.save_customer(&customer).unwrap();
        store.save_property(&property).unwrap();
        store.save_unit(&unit).unwrap();
        (BookingService::new(store), customer, unit)
    }

    #[test]
    fn test_create_reservation_happy_path() {
        let dir = tempdir().unwrap();
        let (mut service, customer, unit) = seeded_service(&dir);

        let reservation = service
            .create_reservation(BookingRequest::new(
                &customer.id,
                &unit.id,
                date(2024, 6, 1),
                date(2024, 6, 5),
                2,
            ))
            .unwrap();

        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(
            service.store().find_reservation(&reservation.id).unwrap(),
            Some(reservation)
        );

        let log = service.store().list_audit_log().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event_type, "reservation_created");
    }

    #[test]
    fn test_create_reservation_unknown_customer() {
        let dir = tempdir().unwrap();
        let (mut service, _, unit) = seeded_service(&dir);

        let result = service.create_reservation(BookingRequest::new(
            "missing",
            &unit.id,
            date(2024, 6, 1),
            date(2024, 6, 5),
            2,
        ));
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_reservation_unknown_unit() {
        let dir = tempdir().unwrap();
        let (mut service, customer, _) = seeded_service(&dir);

        let result = service.create_reservation(BookingRequest::new(
            &customer.id,
            "missing",
            date(2024, 6, 1),
            date(2024, 6, 5),
            2,
        ));
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_reservation_conflict() {
        let dir = tempdir().unwrap();
        let (mut service, customer, unit) = seeded_service(&dir);

        service
            .create_reservation(BookingRequest::new(
                &customer.id,
                &unit.id,
                date(2024, 6, 1),
                date(2024, 6, 5),
                2,
            ))
            .unwrap();

        let result = service.create_reservation(BookingRequest::new(
            &customer.id,
            &unit.id,
            date(2024, 6, 4),
            date(2024, 6, 8),
            1,
        ));
        assert!(result.unwrap_err().is_conflict());

        // Only the first reservation survived the rollback.
        assert_eq!(service.store().list_reservations().unwrap().len(), 1);
        assert_eq!(service.store().list_audit_log().unwrap().len(), 1);
    }

    #[test]
    fn test_create_reservation_back_to_back() {
        let dir = tempdir().unwrap();
        let (mut service, customer, unit) = seeded_service(&dir);

        service
            .create_reservation(BookingRequest::new(
                &customer.id,
                &unit.id,
                date(2024, 6, 1),
                date(2024, 6, 5),
                2,
            ))
            .unwrap();
        let second = service.create_reservation(BookingRequest::new(
            &customer.id,
            &unit.id,
            date(2024, 6, 5),
            date(2024, 6, 8),
            1,
        ));
        assert!(second.is_ok());
    }

    #[test]
    fn test_create_reservation_invalid_guests() {
        let dir = tempdir().unwrap();
        let (mut service, customer, unit) = seeded_service(&dir);

        let result = service.create_reservation(BookingRequest::new(
            &customer.id,
            &unit.id,
            date(2024, 6, 1),
            date(2024, 6, 5),
            0,
        ));
        assert!(result.unwrap_err().is_validation());
        assert!(service.store().list_reservations().unwrap().is_empty());
    }

    #[test]
    fn test_cancel_reservation_idempotent() {
        let dir = tempdir().unwrap();
        let (mut service, customer, unit) = seeded_service(&dir);

        let reservation = service
            .create_reservation(BookingRequest::new(
                &customer.id,
                &unit.id,
                date(2024, 6, 1),
                date(2024, 6, 5),
                2,
            ))
            .unwrap();

        assert!(service.cancel_reservation(&reservation.id).unwrap());
        assert!(service.cancel_reservation(&reservation.id).unwrap());
        assert!(!service.cancel_reservation("missing").unwrap());

        let stored = service
            .store()
            .find_reservation(&reservation.id)
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, ReservationStatus::Cancelled);

        // One created, one cancelled; the repeat cancel wrote nothing.
        let cancelled: Vec<_> = service
            .store()
            .list_audit_log()
            .unwrap()
            .into_iter()
            .filter(|entry| entry.event_type == "reservation_cancelled")
            .collect();
        assert_eq!(cancelled.len(), 1);
    }

    #[test]
    fn test_cancel_frees_dates() {
        let dir = tempdir().unwrap();
        let (mut service, customer, unit) = seeded_service(&dir);

        let reservation = service
            .create_reservation(BookingRequest::new(
                &customer.id,
                &unit.id,
                date(2024, 6, 1),
                date(2024, 6, 5),
                2,
            ))
            .unwrap();
        service.cancel_reservation(&reservation.id).unwrap();

        let rebook = service.create_reservation(BookingRequest::new(
            &customer.id,
            &unit.id,
            date(2024, 6, 2),
            date(2024, 6, 4),
            1,
        ));
        assert!(rebook.is_ok());
    }

    #[test]
    fn test_payment_lifecycle() {
        let dir = tempdir().unwrap();
        let (mut service, customer, unit) = seeded_service(&dir);

        let reservation = service
            .create_reservation(BookingRequest::new(
                &customer.id,
                &unit.id,
                date(2024, 6, 1),
                date(2024, 6, 5),
                2,
            ))
            .unwrap();

        let payment = service
            .attach_payment(&reservation.id, 480.0, "USD")
            .unwrap();
        assert_eq!(payment.status, PaymentStatus::Pending);

        let paid = service.mark_payment_paid(&payment.id, "txn-1").unwrap();
        assert_eq!(paid.status, PaymentStatus::Paid);

        let refunded = service.mark_payment_refunded(&payment.id).unwrap();
        assert_eq!(refunded.status, PaymentStatus::Refunded);

        let events: Vec<_> = service
            .store()
            .list_audit_log()
            .unwrap()
            .into_iter()
            .map(|entry| entry.event_type)
            .collect();
        assert_eq!(
            events,
            vec![
                "reservation_created",
                "payment_attached",
                "payment_marked_paid",
                "payment_refunded",
            ]
        );
    }

    #[test]
    fn test_attach_payment_unknown_reservation() {
        let dir = tempdir().unwrap();
        let (mut service, _, _) = seeded_service(&dir);
        let result = service.attach_payment("missing", 100.0, "USD");
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_refund_requires_paid() {
        let dir = tempdir().unwrap();
        let (mut service, customer, unit) = seeded_service(&dir);

        let reservation = service
            .create_reservation(BookingRequest::new(
                &customer.id,
                &unit.id,
                date(2024, 6, 1),
                date(2024, 6, 5),
                2,
            ))
            .unwrap();
        let payment = service
            .attach_payment(&reservation.id, 480.0, "USD")
            .unwrap();

        let result = service.mark_payment_refunded(&payment.id);
        assert!(result.unwrap_err().is_validation());
    }
}
