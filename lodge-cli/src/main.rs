//! Main entry point for the lodge CLI.
//!
//! This is the command-line interface for the lodge reservation system.
//! It provides commands for managing inventory and bookings:
//! - `init`: Initialize the data directory and store
//! - `add`: Add customers, properties, units, rate plans, and add-ons
//! - `book`: Book a unit for a customer
//! - `cancel`: Cancel a reservation
//! - `list`: List reservations
//! - `quote`: Quote the price of a stay
//! - `availability`: Check whether a unit is free
//! - `occupancy`, `calendar`, `revenue`: Reporting
//! - `waitlist`: Join the waitlist and list ready entries
//! - `payment`: Attach, settle, and refund payments

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = lodge::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Add(cmd) => cmd.execute(&global),
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Quote(cmd) => cmd.execute(&global),
        cli::Command::Availability(cmd) => cmd.execute(&global),
        cli::Command::Occupancy(cmd) => cmd.execute(&global),
        cli::Command::Calendar(cmd) => cmd.execute(&global),
        cli::Command::Revenue(cmd) => cmd.execute(&global),
        cli::Command::Waitlist(cmd) => cmd.execute(&global),
        cli::Command::Payment(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
