//! Calendar command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use lodge::availability_calendar;
use std::io::Write;

/// Show a month's availability calendar for a property.
#[derive(Args)]
pub struct CalendarCommand {
    /// Identifier of the property
    #[arg(long, value_name = "ID")]
    property: String,

    /// Month number (1-12)
    #[arg(long, value_name = "MONTH")]
    month: u32,

    /// Calendar year
    #[arg(long, value_name = "YEAR")]
    year: i32,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl CalendarCommand {
    /// Execute the calendar command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let calendar = availability_calendar(&store, &self.property, self.month, self.year)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        if self.json {
            serde_json::to_writer_pretty(&mut handle, &calendar)
                .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
            writeln!(handle)?;
        } else {
            for (unit_name, days) in &calendar {
                writeln!(handle, "{unit_name}:")?;
                for (date, status) in days {
                    writeln!(handle, "  {date}\t{}", status.as_str())?;
                }
            }
        }

        Ok(())
    }
}
