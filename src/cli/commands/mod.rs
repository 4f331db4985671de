//! Command implementations for the billing CLI
//!
//! Each subcommand lives in its own module and returns the batch
//! statistics for the run so the binary can report a single outcome.

pub mod invoice;
pub mod shared;
pub mod summary;
pub mod validate;

use crate::app::services::billing::BillingStats;
use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the billing tool
///
/// Dispatches to the appropriate subcommand handler:
/// - `invoice`: full billing run with invoice documents and reports
/// - `summary`: per-customer totals without invoice documents
/// - `validate`: roster schema and field checks
pub fn run(args: Args) -> Result<BillingStats> {
    match args.get_command() {
        Commands::Invoice(invoice_args) => invoice::run_invoice(invoice_args),
        Commands::Summary(summary_args) => summary::run_summary(summary_args),
        Commands::Validate(validate_args) => validate::run_validate(validate_args),
    }
}
