//! Demo data seeding.

use chrono::{Duration, Utc};

use crate::domain::{AddOn, AuditLogEntry, Customer, Property, RatePlan, Reservation, Unit};
use crate::error::Result;
use crate::store::RecordStore;

/// Seeds a store with sample data for experimentation.
///
/// Writes one property with two units, rate plans, add-ons, a customer
/// and a reservation starting today. Does nothing when the store
/// already holds at least one property, so repeated runs are safe.
///
/// # Errors
///
/// Propagates storage errors.
pub fn bootstrap_demo_data<S: RecordStore>(store: &mut S) -> Result<()> {
    if !store.list_properties()?.is_empty() {
        return Ok(());
    }

    let property = Property::new(
        "Hotel Central",
        "123 Main Street, Prague",
        Some("Modern hotel in the heart of the city".to_string()),
    )?;
    store.save_property(&property)?;

    let deluxe = Unit::new(
        &property.id,
        "Deluxe Room",
        2,
        120.0,
        vec![
            "WiFi".to_string(),
            "Breakfast".to_string(),
            "Air Conditioning".to_string(),
        ],
    )?;
    let suite = Unit::new(
        &property.id,
        "Executive Suite",
        4,
        250.0,
        vec![
            "WiFi".to_string(),
            "Breakfast".to_string(),
            "Balcony".to_string(),
            "Kitchenette".to_string(),
        ],
    )?;
    store.save_unit(&deluxe)?;
    store.save_unit(&suite)?;

    store.save_rate_plan(&RatePlan::new(&deluxe.id, "Standard", 120.0, 1, None, 20.0)?)?;
    store.save_rate_plan(&RatePlan::new(&suite.id, "Flexible", 260.0, 2, None, 35.0)?)?;

    let breakfast = AddOn::new("Breakfast", 12.0, Some("Buffet breakfast".to_string()))?;
    let parking = AddOn::new("Parking", 15.0, Some("Underground parking".to_string()))?;
    store.save_addon(&breakfast)?;
    store.save_addon(&parking)?;

    let customer = Customer::new("Anna Novak", "anna@example.com", None)?;
    store.save_customer(&customer)?;

    let today = Utc::now().date_naive();
    let reservation = Reservation::builder(&customer.id, &deluxe.id, today, today + Duration::days(3))
        .adults(2)
        .addons(vec![breakfast.id, parking.id])
        .build()?;
    store.save_reservation(&reservation)?;

    store.save_audit_entry(&AuditLogEntry::new(
        "bootstrap_completed",
        [("property_id", property.id.as_str())],
    ))?;
    Ok(())
}
