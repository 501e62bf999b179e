//! Cancel command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use lodge::BookingService;

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Identifier of the reservation to cancel
    #[arg(value_name = "RESERVATION")]
    reservation_id: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let mut service = BookingService::new(store);
        if service.cancel_reservation(&self.reservation_id)? {
            println!("Cancelled reservation: {}", self.reservation_id);
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "No reservation with id {}",
                self.reservation_id
            )))
        }
    }
}
