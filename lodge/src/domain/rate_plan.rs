//! Rate plans: named pricing policies for units.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::{generate_id, ValidationError};

/// A pricing strategy for a unit.
///
/// A unit may have zero or more rate plans; multiple plans are mutually
/// exclusive pricing options and the cheapest valid one wins when
/// quoting (see [`crate::pricing::price_quote`]).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lodge::RatePlan;
///
/// let plan = RatePlan::new("unit-1", "Standard", 100.0, 1, None, 20.0).unwrap();
/// // Fri..Mon: three weekend nights at 100 + 20 each.
/// let check_in = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// assert_eq!(plan.price_for(check_in, check_out).unwrap(), 360.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatePlan {
    /// Generated identifier.
    pub id: String,
    /// Identifier of the unit this plan prices.
    pub unit_id: String,
    /// The plan's display name.
    pub name: String,
    /// Nightly base price.
    pub base_price: f64,
    /// Minimum stay length in nights; at least 1.
    pub min_nights: u32,
    /// Optional maximum stay length in nights.
    pub max_nights: Option<u32>,
    /// Extra charge added on Friday, Saturday and Sunday nights.
    pub weekend_surcharge: f64,
}

impl RatePlan {
    /// Creates a new rate plan.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_nights` is zero or the weekend surcharge
    /// is negative.
    pub fn new(
        unit_id: impl Into<String>,
        name: impl Into<String>,
        base_price: f64,
        min_nights: u32,
        max_nights: Option<u32>,
        weekend_surcharge: f64,
    ) -> Result<Self, ValidationError> {
        if min_nights == 0 {
            return Err(ValidationError::new("min_nights", "must be at least 1"));
        }
        if weekend_surcharge < 0.0 {
            return Err(ValidationError::new(
                "weekend_surcharge",
                "cannot be negative",
            ));
        }

        Ok(Self {
            id: generate_id(),
            unit_id: unit_id.into(),
            name: name.into(),
            base_price,
            min_nights,
            max_nights,
            weekend_surcharge,
        })
    }

    /// Computes the total price for a stay over `[check_in, check_out)`.
    ///
    /// Each night costs `base_price`, plus `weekend_surcharge` when the
    /// night's date falls on a Friday, Saturday or Sunday. The sum is
    /// rounded to two decimal places.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of nights is below `min_nights` or
    /// above `max_nights` (when set).
    pub fn price_for(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<f64, ValidationError> {
        let nights = (check_out - check_in).num_days();
        if nights < i64::from(self.min_nights) {
            return Err(ValidationError::new(
                "nights",
                "stay does not meet the minimum night requirement",
            ));
        }
        if let Some(max_nights) = self.max_nights {
            if nights > i64::from(max_nights) {
                return Err(ValidationError::new(
                    "nights",
                    "stay exceeds the maximum night requirement",
                ));
            }
        }

        let mut total = 0.0;
        let mut current = check_in;
        while current < check_out {
            total += self.base_price;
            if is_weekend_night(current) {
                total += self.weekend_surcharge;
            }
            current = current
                .succ_opt()
                .ok_or_else(|| ValidationError::new("check_out", "date out of supported range"))?;
        }
        Ok((total * 100.0).round() / 100.0)
    }
}

/// Whether a night starting on `date` attracts the weekend surcharge.
fn is_weekend_night(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun)
}
