//! Customer entity.

use serde::{Deserialize, Serialize};

use super::{generate_id, ValidationError};

/// A customer within the booking platform.
///
/// The email address is trimmed and lowercased on construction and must
/// contain an `@`. Customers are immutable after creation except via full
/// replacement in the record store.
///
/// # Examples
///
/// ```
/// use lodge::Customer;
///
/// let customer = Customer::new("Anna Novak", "Anna@Example.com", None).unwrap();
/// assert_eq!(customer.email, "anna@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Generated identifier.
    pub id: String,
    /// The customer's display name.
    pub full_name: String,
    /// Normalized (trimmed, lowercased) email address.
    pub email: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
}

impl Customer {
    /// Creates a new customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the email does not
    /// contain an `@`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::Customer;
    ///
    /// assert!(Customer::new("", "anna@example.com", None).is_err());
    /// assert!(Customer::new("Anna Novak", "not-an-email", None).is_err());
    /// ```
    pub fn new(
        full_name: impl Into<String>,
        email: &str,
        phone: Option<String>,
    ) -> Result<Self, ValidationError> {
        let full_name = full_name.into();
        if full_name.is_empty() {
            return Err(ValidationError::new("full_name", "must not be empty"));
        }

        let email = email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(ValidationError::new("email", "must contain '@'"));
        }

        Ok(Self {
            id: generate_id(),
            full_name,
            email,
            phone,
        })
    }
}
