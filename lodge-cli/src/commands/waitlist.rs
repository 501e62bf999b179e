//! Waitlist command implementation.
//!
//! Joins customers to the waitlist for a unit and reports which
//! entries have become bookable.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date, GlobalOptions};
use clap::{Args, Subcommand};
use lodge::{add_to_waitlist, waitlist_notifications};

/// Manage the waitlist.
#[derive(Args)]
pub struct WaitlistCommand {
    #[command(subcommand)]
    action: WaitlistAction,
}

#[derive(Subcommand)]
enum WaitlistAction {
    /// Join the waitlist for a unit
    Join(JoinArgs),

    /// List entries whose desired dates have become free
    Notifications,
}

#[derive(Args)]
struct JoinArgs {
    /// Identifier of the desired unit
    #[arg(long, value_name = "ID")]
    unit: String,

    /// Identifier of the waiting customer
    #[arg(long, value_name = "ID")]
    customer: String,

    /// Desired first night (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    check_in: String,

    /// Desired departure day (YYYY-MM-DD, exclusive)
    #[arg(long, value_name = "DATE")]
    check_out: String,
}

impl WaitlistCommand {
    /// Execute the waitlist command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;

        match self.action {
            WaitlistAction::Join(args) => {
                let check_in = parse_date(&args.check_in)?;
                let check_out = parse_date(&args.check_out)?;

                let entry =
                    add_to_waitlist(&mut store, &args.unit, &args.customer, check_in, check_out)?;
                println!("Joined waitlist: {}", entry.id);
            }
            WaitlistAction::Notifications => {
                let ready = waitlist_notifications(&store)?;
                if ready.is_empty() {
                    println!("No waitlist entries are ready");
                } else {
                    for entry in ready {
                        println!(
                            "{}\tunit {}\tcustomer {}\t{} to {}",
                            entry.id,
                            entry.unit_id,
                            entry.customer_id,
                            entry.desired_check_in,
                            entry.desired_check_out
                        );
                    }
                }
            }
        }

        Ok(())
    }
}
