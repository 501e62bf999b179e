//! Reservation entity and its lifecycle states.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{generate_id, ValidationError};

/// Lifecycle state of a reservation.
///
/// The state machine is `Confirmed` (initial) → `Cancelled` (terminal);
/// there is no transition out of `Cancelled`. Only confirmed
/// reservations block availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// An active booking that blocks availability.
    Confirmed,
    /// A cancelled booking; imposes no availability constraint.
    Cancelled,
}

impl ReservationStatus {
    /// Returns the lowercase string form used on the wire and in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ValidationError::new("status", "unsupported reservation status")),
        }
    }
}

/// A customer reservation for a particular unit.
///
/// Date ranges are half-open: the night of `check_out` is not part of
/// the stay. Attached add-on ids are carried verbatim and not validated
/// against add-on existence.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lodge::{Reservation, ReservationStatus};
///
/// let reservation = Reservation::builder(
///     "cust-1",
///     "unit-1",
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
/// )
/// .adults(2)
/// .build()
/// .unwrap();
///
/// assert_eq!(reservation.status, ReservationStatus::Confirmed);
/// assert_eq!(reservation.nights(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Generated identifier.
    pub id: String,
    /// Identifier of the booking customer.
    pub customer_id: String,
    /// Identifier of the reserved unit.
    pub unit_id: String,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Day of departure; not part of the stay.
    pub check_out: NaiveDate,
    /// Number of adults; at least one.
    pub adults: u32,
    /// Number of children.
    pub children: u32,
    /// Current lifecycle state.
    pub status: ReservationStatus,
    /// Ids of attached add-ons.
    pub addons: Vec<String>,
    /// Creation timestamp; immutable.
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Creates a new reservation builder.
    #[must_use]
    pub fn builder(
        customer_id: impl Into<String>,
        unit_id: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> ReservationBuilder {
        ReservationBuilder {
            customer_id: customer_id.into(),
            unit_id: unit_id.into(),
            check_in,
            check_out,
            adults: 1,
            children: 0,
            addons: Vec::new(),
            created_at: None,
        }
    }

    /// Length of the stay in nights.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Whether the reservation currently blocks availability.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }

    /// Whether `day` falls within the half-open stay range.
    #[must_use]
    pub fn covers(&self, day: NaiveDate) -> bool {
        day >= self.check_in && day < self.check_out
    }

    /// Whether the half-open range `[check_in, check_out)` overlaps this
    /// reservation's stay.
    #[must_use]
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        !(check_out <= self.check_in || check_in >= self.check_out)
    }
}

/// Builder for creating [`Reservation`] instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    customer_id: String,
    unit_id: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    adults: u32,
    children: u32,
    addons: Vec<String>,
    created_at: Option<DateTime<Utc>>,
}

impl ReservationBuilder {
    /// Sets the number of adults (default 1).
    #[must_use]
    pub const fn adults(mut self, adults: u32) -> Self {
        self.adults = adults;
        self
    }

    /// Sets the number of children (default 0).
    #[must_use]
    pub const fn children(mut self, children: u32) -> Self {
        self.children = children;
        self
    }

    /// Sets the attached add-on ids.
    #[must_use]
    pub fn addons(mut self, addons: Vec<String>) -> Self {
        self.addons = addons;
        self
    }

    /// Sets the creation timestamp (defaults to now).
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the reservation with status `Confirmed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `check_in` is not strictly before `check_out`
    /// or if no adults are included.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use lodge::Reservation;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// // Empty range is rejected.
    /// assert!(Reservation::builder("c", "u", day, day).build().is_err());
    /// ```
    pub fn build(self) -> Result<Reservation, ValidationError> {
        if self.check_in >= self.check_out {
            return Err(ValidationError::new(
                "check_out",
                "must be after the check-in date",
            ));
        }
        if self.adults == 0 {
            return Err(ValidationError::new(
                "adults",
                "must include at least one adult",
            ));
        }

        Ok(Reservation {
            id: generate_id(),
            customer_id: self.customer_id,
            unit_id: self.unit_id,
            check_in: self.check_in,
            check_out: self.check_out,
            adults: self.adults,
            children: self.children,
            status: ReservationStatus::Confirmed,
            addons: self.addons,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}
