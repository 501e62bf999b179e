//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the data directory and store
//! - `add`: Add a customer, property, unit, rate plan, or add-on
//! - `book`: Book a unit for a customer
//! - `cancel`: Cancel a reservation
//! - `list`: List reservations
//! - `quote`: Quote the price of a stay
//! - `availability`: Check whether a unit is free over a date range
//! - `occupancy`: Report per-day occupancy for a property
//! - `calendar`: Show a month's availability calendar
//! - `revenue`: Summarize settled revenue
//! - `waitlist`: Join the waitlist and list ready entries
//! - `payment`: Attach, settle, and refund payments
//! - `completions`: Generate shell completion scripts

pub mod add;
pub mod availability;
pub mod book;
pub mod calendar;
pub mod cancel;
pub mod completions;
pub mod init;
pub mod list;
pub mod occupancy;
pub mod payment;
pub mod quote;
pub mod revenue;
pub mod waitlist;

pub use add::AddCommand;
pub use availability::AvailabilityCommand;
pub use book::BookCommand;
pub use calendar::CalendarCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use occupancy::OccupancyCommand;
pub use payment::PaymentCommand;
pub use quote::QuoteCommand;
pub use revenue::RevenueCommand;
pub use waitlist::WaitlistCommand;
