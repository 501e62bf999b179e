//! Occupancy command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date, GlobalOptions};
use clap::Args;
use lodge::occupancy_report;
use std::io::Write;

/// Report per-day occupancy for a property.
#[derive(Args)]
pub struct OccupancyCommand {
    /// Identifier of the property
    #[arg(long, value_name = "ID")]
    property: String,

    /// First day of the report (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    start: String,

    /// Day after the last reported day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    end: String,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl OccupancyCommand {
    /// Execute the occupancy command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let start = parse_date(&self.start)?;
        let end = parse_date(&self.end)?;

        let report = occupancy_report(&store, &self.property, start, end)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        if self.json {
            serde_json::to_writer_pretty(&mut handle, &report)
                .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
            writeln!(handle)?;
        } else {
            writeln!(handle, "DATE\tOCCUPIED\tAVAILABLE")?;
            for (date, day) in &report {
                writeln!(handle, "{date}\t{}\t{}", day.occupied, day.available)?;
            }
        }

        Ok(())
    }
}
