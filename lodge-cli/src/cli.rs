//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, AvailabilityCommand, BookCommand, CalendarCommand, CancelCommand,
    CompletionsCommand, InitCommand, ListCommand, OccupancyCommand, PaymentCommand, QuoteCommand,
    RevenueCommand, WaitlistCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing bookable units and reservations.
#[derive(Parser)]
#[command(name = "lodge")]
#[command(version, about = "Manage bookable units and reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "LODGE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "LODGE_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic store initialization
    #[arg(long, global = true, env = "LODGE_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and store
    Init(InitCommand),

    /// Add a customer, property, unit, rate plan, or add-on
    Add(AddCommand),

    /// Book a unit for a customer
    Book(BookCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// List reservations
    List(ListCommand),

    /// Quote the price of a stay
    Quote(QuoteCommand),

    /// Check whether a unit is free over a date range
    Availability(AvailabilityCommand),

    /// Report per-day occupancy for a property
    Occupancy(OccupancyCommand),

    /// Show a month's availability calendar for a property
    Calendar(CalendarCommand),

    /// Summarize settled revenue for a property
    Revenue(RevenueCommand),

    /// Manage the waitlist
    Waitlist(WaitlistCommand),

    /// Manage payments for a reservation
    Payment(PaymentCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
