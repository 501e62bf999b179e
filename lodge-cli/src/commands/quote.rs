//! Quote command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date, GlobalOptions};
use clap::Args;
use lodge::price_quote;

/// Quote the price of a stay.
#[derive(Args)]
pub struct QuoteCommand {
    /// Identifier of the unit
    #[arg(long, value_name = "ID")]
    unit: String,

    /// First night of the stay (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    check_in: String,

    /// Day of departure (YYYY-MM-DD, exclusive)
    #[arg(long, value_name = "DATE")]
    check_out: String,
}

impl QuoteCommand {
    /// Execute the quote command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let check_in = parse_date(&self.check_in)?;
        let check_out = parse_date(&self.check_out)?;

        let total = price_quote(&store, &self.unit, check_in, check_out)?;
        let nights = (check_out - check_in).num_days();

        println!(
            "{nights} nights in unit {}: {total:.2} {}",
            self.unit, config.default_currency
        );

        Ok(())
    }
}
