//! Payment command implementation.
//!
//! Attaches payments to reservations and moves them through their
//! settlement lifecycle.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::{Args, Subcommand};
use lodge::BookingService;

/// Manage payments for a reservation.
#[derive(Args)]
pub struct PaymentCommand {
    #[command(subcommand)]
    action: PaymentAction,
}

#[derive(Subcommand)]
enum PaymentAction {
    /// Attach a pending payment to a reservation
    Attach(AttachArgs),

    /// Mark a payment as settled
    Paid(PaidArgs),

    /// Refund a settled payment
    Refund(RefundArgs),
}

#[derive(Args)]
struct AttachArgs {
    /// Identifier of the reservation being paid for
    #[arg(long, value_name = "ID")]
    reservation: String,

    /// Payment amount
    #[arg(long, value_name = "AMOUNT")]
    amount: f64,

    /// ISO currency code (defaults to the configured currency)
    #[arg(long, value_name = "CODE")]
    currency: Option<String>,
}

#[derive(Args)]
struct PaidArgs {
    /// Identifier of the payment
    #[arg(value_name = "PAYMENT")]
    payment: String,

    /// Gateway transaction reference
    #[arg(long, value_name = "REFERENCE")]
    reference: String,
}

#[derive(Args)]
struct RefundArgs {
    /// Identifier of the payment
    #[arg(value_name = "PAYMENT")]
    payment: String,
}

impl PaymentCommand {
    /// Execute the payment command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;
        let mut service = BookingService::new(store);

        match self.action {
            PaymentAction::Attach(args) => {
                let currency = args
                    .currency
                    .unwrap_or_else(|| config.default_currency.clone());
                let payment =
                    service.attach_payment(&args.reservation, args.amount, &currency)?;
                println!(
                    "Attached payment of {:.2} {}: {}",
                    payment.amount, payment.currency, payment.id
                );
            }
            PaymentAction::Paid(args) => {
                let payment = service.mark_payment_paid(&args.payment, &args.reference)?;
                println!("Payment {} marked as paid", payment.id);
            }
            PaymentAction::Refund(args) => {
                let payment = service.mark_payment_refunded(&args.payment)?;
                println!("Payment {} refunded", payment.id);
            }
        }

        Ok(())
    }
}
