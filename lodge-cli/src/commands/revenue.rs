//! Revenue command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date, GlobalOptions};
use clap::Args;
use lodge::revenue_summary;
use std::io::Write;

/// Summarize settled revenue for a property.
#[derive(Args)]
pub struct RevenueCommand {
    /// Identifier of the property
    #[arg(long, value_name = "ID")]
    property: String,

    /// First settlement day to count (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    start: String,

    /// Last settlement day to count (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    end: String,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl RevenueCommand {
    /// Execute the revenue command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let start = parse_date(&self.start)?;
        let end = parse_date(&self.end)?;

        let totals = revenue_summary(&store, &self.property, start, end)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        if self.json {
            serde_json::to_writer_pretty(&mut handle, &totals)
                .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
            writeln!(handle)?;
        } else if totals.is_empty() {
            writeln!(handle, "No settled revenue between {start} and {end}")?;
        } else {
            writeln!(handle, "CURRENCY\tTOTAL")?;
            for (currency, total) in &totals {
                writeln!(handle, "{currency}\t{total:.2}")?;
            }
        }

        Ok(())
    }
}
