//! List command implementation.
//!
//! This module implements the `list` command, which displays
//! reservations in various formats (table, JSON, CSV).

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_store, GlobalOptions};
use clap::{Args, ValueEnum};
use lodge::{RecordStore, Reservation};
use serde::Serialize;
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 8] = [
    "id",
    "unit_id",
    "customer_id",
    "check_in",
    "check_out",
    "guests",
    "status",
    "created_at",
];

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "LODGE_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Filter by unit
    #[arg(long, value_name = "ID")]
    pub filter_unit: Option<String>,

    /// Filter by customer
    #[arg(long, value_name = "ID")]
    pub filter_customer: Option<String>,

    /// Include cancelled reservations
    #[arg(long)]
    pub include_cancelled: bool,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

/// One reservation as it appears in JSON and CSV output.
#[derive(Serialize)]
struct ReservationRow {
    id: String,
    unit_id: String,
    customer_id: String,
    check_in: String,
    check_out: String,
    guests: u32,
    status: String,
    created_at: String,
}

impl From<&Reservation> for ReservationRow {
    fn from(res: &Reservation) -> Self {
        Self {
            id: res.id.clone(),
            unit_id: res.unit_id.clone(),
            customer_id: res.customer_id.clone(),
            check_in: res.check_in.to_string(),
            check_out: res.check_out.to_string(),
            guests: res.adults + res.children,
            status: res.status.to_string(),
            created_at: format_timestamp(res.created_at),
        }
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Open the store
        let store = open_store(global, &config)?;

        // 3. Query reservations
        let mut reservations = store.list_reservations().map_err(CliError::from)?;

        // 4. Apply filters
        if !self.include_cancelled {
            reservations.retain(Reservation::is_confirmed);
        }

        if let Some(ref unit_id) = self.filter_unit {
            reservations.retain(|r| &r.unit_id == unit_id);
        }

        if let Some(ref customer_id) = self.filter_customer {
            reservations.retain(|r| &r.customer_id == customer_id);
        }

        // 5. Format and output to stdout
        match self.format {
            OutputFormat::Table => format_as_table(&reservations)?,
            OutputFormat::Json => format_as_json(&reservations)?,
            OutputFormat::Csv => format_as_csv(&reservations)?,
        }

        Ok(())
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    // Print each reservation
    for res in reservations {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            res.id,
            res.unit_id,
            res.customer_id,
            res.check_in,
            res.check_out,
            res.adults + res.children,
            res.status,
            format_timestamp(res.created_at),
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let rows: Vec<ReservationRow> = reservations.iter().map(ReservationRow::from).collect();

    serde_json::to_writer_pretty(&mut handle, &rows)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Format reservations as CSV.
fn format_as_csv(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    for res in reservations {
        writer
            .serialize(ReservationRow::from(res))
            .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    }

    writer.flush()?;

    Ok(())
}
