//! Book command implementation.
//!
//! This module implements the `book` command, which admits a reservation
//! for a customer after availability and validation checks.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date, GlobalOptions};
use clap::Args;
use lodge::{BookingRequest, BookingService};

/// Book a unit for a customer.
#[derive(Args)]
pub struct BookCommand {
    /// Identifier of the booking customer
    #[arg(long, value_name = "ID")]
    customer: String,

    /// Identifier of the unit to reserve
    #[arg(long, value_name = "ID")]
    unit: String,

    /// First night of the stay (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    check_in: String,

    /// Day of departure (YYYY-MM-DD, exclusive)
    #[arg(long, value_name = "DATE")]
    check_out: String,

    /// Number of adults
    #[arg(long, value_name = "COUNT", default_value = "1")]
    adults: u32,

    /// Number of children
    #[arg(long, value_name = "COUNT", default_value = "0")]
    children: u32,

    /// Add-on identifier to attach (repeatable)
    #[arg(long = "addon", value_name = "ID")]
    addons: Vec<String>,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let check_in = parse_date(&self.check_in)?;
        let check_out = parse_date(&self.check_out)?;

        let request = BookingRequest::new(&self.customer, &self.unit, check_in, check_out, self.adults)
            .with_children(self.children)
            .with_addons(self.addons);

        let mut service = BookingService::new(store);
        let reservation = service.create_reservation(request)?;

        println!(
            "Booked {} nights from {} in unit {}",
            reservation.nights(),
            reservation.check_in,
            reservation.unit_id
        );
        println!("Reservation id: {}", reservation.id);

        Ok(())
    }
}
