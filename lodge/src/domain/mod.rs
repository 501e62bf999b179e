//! Domain entities for the booking platform.
//!
//! Every entity validates its invariants at construction time and carries
//! a generated UUIDv4 identifier. Entities are plain serializable records;
//! the record store encodes them at its own boundary.

mod customer;
mod inventory;
mod payment;
mod rate_plan;
mod records;
mod reservation;

pub use customer::Customer;
pub use inventory::{AddOn, Property, Unit};
pub use payment::{Payment, PaymentStatus};
pub use rate_plan::RatePlan;
pub use records::{AuditLogEntry, InventorySnapshot, WaitlistEntry};
pub use reservation::{Reservation, ReservationBuilder, ReservationStatus};

use uuid::Uuid;

/// Returns a fresh UUIDv4 identifier string.
pub(crate) fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Error type for entity validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
