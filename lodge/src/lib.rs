#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # lodge
//!
//! A library for managing bookable inventory and customer reservations.
//!
//! lodge tracks properties and their rentable units, quotes nightly
//! prices from rate plans, admits conflict-free reservations, and
//! aggregates occupancy and revenue. Persistence goes through the
//! [`RecordStore`] trait; a SQLite-backed implementation is provided.
//!
//! ## Core Types
//!
//! - [`Customer`], [`Property`], [`Unit`], [`Reservation`]: validated domain entities
//! - [`RecordStore`] and [`SqliteStore`]: the persistence seam
//! - [`BookingService`]: the reservation lifecycle manager
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use lodge::RatePlan;
//!
//! let plan = RatePlan::new("unit-1", "Standard", 100.0, 1, None, 20.0).unwrap();
//! let check_in = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(); // a Friday
//! let check_out = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! assert_eq!(plan.price_for(check_in, check_out).unwrap(), 360.0);
//! ```

pub mod availability;
pub mod booking;
pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod logging;
pub mod pricing;
pub mod reporting;
pub mod store;
pub mod waitlist;

// Re-export key types at crate root for convenience
pub use availability::{
    availability_calendar, check_availability, next_available_date, occupancy_report, DayOccupancy,
    DayStatus,
};
pub use booking::{BookingRequest, BookingService};
pub use config::{default_data_dir, Config, ConfigBuilder};
pub use demo::bootstrap_demo_data;
pub use domain::{
    AddOn, AuditLogEntry, Customer, InventorySnapshot, Payment, PaymentStatus, Property, RatePlan,
    Reservation, ReservationStatus, Unit, ValidationError, WaitlistEntry,
};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use pricing::price_quote;
pub use reporting::revenue_summary;
pub use store::{RecordStore, SqliteStore, StoreConfig};
pub use waitlist::{add_to_waitlist, waitlist_notifications};
