//! Payment records and their state transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{generate_id, ValidationError};

/// Settlement state of a payment.
///
/// Valid transitions are `Pending` → `Paid` (via [`Payment::mark_paid`])
/// and `Paid` → `Refunded` (via [`Payment::mark_refunded`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Recorded but not yet settled.
    Pending,
    /// Settled; carries a transaction reference and timestamp.
    Paid,
    /// Settled and subsequently refunded.
    Refunded,
}

impl PaymentStatus {
    /// Returns the lowercase string form used on the wire and in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "refunded" => Ok(Self::Refunded),
            _ => Err(ValidationError::new("status", "unsupported payment status")),
        }
    }
}

/// Payment details for a reservation.
///
/// The amount is not validated against the reservation price; that is
/// the caller's responsibility.
///
/// # Examples
///
/// ```
/// use lodge::{Payment, PaymentStatus};
///
/// let mut payment = Payment::new("res-1", 360.0, "USD");
/// assert_eq!(payment.status, PaymentStatus::Pending);
///
/// payment.mark_paid("txn-123");
/// assert_eq!(payment.status, PaymentStatus::Paid);
/// assert!(payment.paid_at.is_some());
///
/// payment.mark_refunded().unwrap();
/// assert_eq!(payment.status, PaymentStatus::Refunded);
/// assert!(payment.paid_at.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Generated identifier.
    pub id: String,
    /// Identifier of the reservation being paid for.
    pub reservation_id: String,
    /// Payment amount in `currency`.
    pub amount: f64,
    /// ISO currency code, for example "USD".
    pub currency: String,
    /// Current settlement state.
    pub status: PaymentStatus,
    /// Gateway transaction reference; set only while `Paid`.
    pub transaction_reference: Option<String>,
    /// Settlement timestamp; set only while `Paid`.
    pub paid_at: Option<DateTime<Utc>>,
}

impl Payment {
    /// Creates a new pending payment.
    #[must_use]
    pub fn new(reservation_id: impl Into<String>, amount: f64, currency: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            reservation_id: reservation_id.into(),
            amount,
            currency: currency.into(),
            status: PaymentStatus::Pending,
            transaction_reference: None,
            paid_at: None,
        }
    }

    /// Marks the payment as paid, recording the transaction reference and
    /// the settlement timestamp.
    pub fn mark_paid(&mut self, reference: impl Into<String>) {
        self.transaction_reference = Some(reference.into());
        self.status = PaymentStatus::Paid;
        self.paid_at = Some(Utc::now());
    }

    /// Marks the payment as refunded, clearing the transaction reference
    /// and settlement timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error unless the payment is currently `Paid`.
    pub fn mark_refunded(&mut self) -> Result<(), ValidationError> {
        if self.status != PaymentStatus::Paid {
            return Err(ValidationError::new(
                "status",
                "only paid payments can be refunded",
            ));
        }
        self.status = PaymentStatus::Refunded;
        self.transaction_reference = None;
        self.paid_at = None;
        Ok(())
    }
}
