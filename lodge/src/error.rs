//! Error types for the lodge library.
//!
//! This module provides the error hierarchy for all operations in the
//! lodge library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a lodge error.
///
/// # Examples
///
/// ```
/// use lodge::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the lodge library.
///
/// The variants map directly onto the failure kinds callers are expected
/// to branch on: validation failures surface at entity construction,
/// conflicts signal an overlapping confirmed reservation, and storage
/// errors mean the persisted state could not be read or written.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error occurred while constructing an entity.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A requested reservation overlaps an existing confirmed reservation.
    ///
    /// Distinct from [`Error::NotFound`] and [`Error::Validation`] so
    /// callers can offer alternative dates (for example via
    /// [`crate::availability::next_available_date`]).
    #[error("reservation conflict: {details}")]
    Conflict {
        /// Details about the conflict.
        details: String,
    },

    /// The underlying record store failed or holds unreadable state.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::domain::ValidationError> for Error {
    fn from(err: crate::domain::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::Error;
    ///
    /// let err = Error::NotFound { resource: "unit abc".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a reservation conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::Error;
    ///
    /// let err = Error::Conflict { details: "unit booked".to_string() };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Check if error is a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
