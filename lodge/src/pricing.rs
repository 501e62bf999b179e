//! Stay pricing.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::store::RecordStore;

/// Quotes the total price for a stay in `unit_id` over the half-open
/// range `[check_in, check_out)`.
///
/// When the unit has rate plans, the cheapest plan that accepts the
/// stay length wins; plans whose night bounds reject the stay are
/// skipped. Without any rate plan the unit's fallback nightly price
/// times the number of nights is used.
///
/// # Errors
///
/// Returns [`Error::NotFound`] for an unknown unit, a validation error
/// for an empty or inverted range, and the last plan rejection when
/// every rate plan rejects the stay.
pub fn price_quote<S: RecordStore>(
    store: &S,
    unit_id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<f64> {
    let unit = store.find_unit(unit_id)?.ok_or_else(|| Error::NotFound {
        resource: format!("unit {unit_id}"),
    })?;
    if check_in >= check_out {
        return Err(Error::Validation {
            field: "check_out".to_string(),
            message: "must be after the check-in date".to_string(),
        });
    }

    let plans = store.rate_plans_for_unit(unit_id)?;
    if plans.is_empty() {
        #[allow(clippy::cast_precision_loss)]
        let nights = (check_out - check_in).num_days() as f64;
        return Ok(unit.price_per_night * nights);
    }

    let mut cheapest: Option<f64> = None;
    let mut rejection = None;
    for plan in &plans {
        match plan.price_for(check_in, check_out) {
            Ok(price) => {
                cheapest = Some(cheapest.map_or(price, |current: f64| current.min(price)));
            }
            Err(e) => rejection = Some(e),
        }
    }

    if let Some(price) = cheapest {
        Ok(price)
    } else if let Some(e) = rejection {
        Err(e.into())
    } else {
        Err(Error::Validation {
            field: "rate_plans".to_string(),
            message: "unit has no usable rate plans".to_string(),
        })
    }
}
