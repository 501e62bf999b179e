//! Bookable inventory entities: properties, units, and add-ons.

use serde::{Deserialize, Serialize};

use super::{generate_id, ValidationError};

/// A hotel, guest house, or any other bookable property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Generated identifier.
    pub id: String,
    /// The property's display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Optional free-form description.
    pub description: Option<String>,
}

impl Property {
    /// Creates a new property.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or address is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::Property;
    ///
    /// let property = Property::new("Hotel Central", "123 Main Street", None).unwrap();
    /// assert_eq!(property.name, "Hotel Central");
    /// ```
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::new("name", "must not be empty"));
        }
        let address = address.into();
        if address.is_empty() {
            return Err(ValidationError::new("address", "must not be empty"));
        }

        Ok(Self {
            id: generate_id(),
            name,
            address,
            description,
        })
    }
}

/// An individual room or apartment within a property, available for booking.
///
/// The `price_per_night` is the fallback rate used when the unit has no
/// rate plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Generated identifier.
    pub id: String,
    /// Identifier of the owning [`Property`].
    pub property_id: String,
    /// The unit's display name.
    pub name: String,
    /// Maximum number of guests.
    pub capacity: u32,
    /// Fallback nightly price when no rate plan applies.
    pub price_per_night: f64,
    /// Ordered list of amenity labels.
    pub amenities: Vec<String>,
}

impl Unit {
    /// Creates a new unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity is zero or the nightly price is
    /// not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::Unit;
    ///
    /// let unit = Unit::new("prop-1", "Deluxe Room", 2, 120.0, vec![]).unwrap();
    /// assert_eq!(unit.capacity, 2);
    ///
    /// assert!(Unit::new("prop-1", "Free Room", 2, 0.0, vec![]).is_err());
    /// ```
    pub fn new(
        property_id: impl Into<String>,
        name: impl Into<String>,
        capacity: u32,
        price_per_night: f64,
        amenities: Vec<String>,
    ) -> Result<Self, ValidationError> {
        if capacity == 0 {
            return Err(ValidationError::new(
                "capacity",
                "must be greater than zero",
            ));
        }
        if price_per_night <= 0.0 {
            return Err(ValidationError::new("price_per_night", "must be positive"));
        }

        Ok(Self {
            id: generate_id(),
            property_id: property_id.into(),
            name: name.into(),
            capacity,
            price_per_night,
            amenities,
        })
    }
}

/// An additional service that can be attached to reservations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    /// Generated identifier.
    pub id: String,
    /// The add-on's display name.
    pub name: String,
    /// Price of the add-on; zero is allowed.
    pub price: f64,
    /// Optional free-form description.
    pub description: Option<String>,
}

impl AddOn {
    /// Creates a new add-on.
    ///
    /// # Errors
    ///
    /// Returns an error if the price is negative.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        if price < 0.0 {
            return Err(ValidationError::new("price", "cannot be negative"));
        }

        Ok(Self {
            id: generate_id(),
            name: name.into(),
            price,
            description,
        })
    }
}
