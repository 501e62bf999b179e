//! Availability command implementation.
//!
//! Checks whether a unit is free over a date range. An occupied range
//! exits with code 1 so scripts can branch on the result; `--next`
//! additionally reports the first free date.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date, GlobalOptions};
use clap::Args;
use lodge::{check_availability, next_available_date};

/// Check whether a unit is free over a date range.
#[derive(Args)]
pub struct AvailabilityCommand {
    /// Identifier of the unit
    #[arg(long, value_name = "ID")]
    unit: String,

    /// First night of the stay (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    check_in: String,

    /// Day of departure (YYYY-MM-DD, exclusive)
    #[arg(long, value_name = "DATE")]
    check_out: String,

    /// Also report the next free date when the range is taken
    #[arg(long)]
    next: bool,
}

impl AvailabilityCommand {
    /// Execute the availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let check_in = parse_date(&self.check_in)?;
        let check_out = parse_date(&self.check_out)?;

        if check_availability(&store, &self.unit, check_in, check_out)? {
            println!(
                "Unit {} is available from {check_in} to {check_out}",
                self.unit
            );
            return Ok(());
        }

        let message = if self.next {
            let next_free = next_available_date(&store, &self.unit, check_in)?;
            format!(
                "Unit {} is not available from {check_in} to {check_out}; next free date: {next_free}",
                self.unit
            )
        } else {
            format!(
                "Unit {} is not available from {check_in} to {check_out}",
                self.unit
            )
        };

        Err(CliError::SemanticFailure(message))
    }
}
