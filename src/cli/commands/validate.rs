//! Validate command implementation
//!
//! Checks a roster CSV before a billing run: required fixed columns,
//! service column grammar, and per-row fields the summary report needs.
//! Problems fail the command so scripted runs stop before billing.

use crate::app::services::billing::BillingStats;
use crate::app::services::roster::{load_roster, read_headers, validate_headers, ColumnStatus};
use crate::cli::args::ValidateArgs;
use crate::cli::commands::shared::setup_logging;
use crate::{Error, Result};
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Run the validate command
pub fn run_validate(args: ValidateArgs) -> Result<BillingStats> {
    args.validate()?;
    setup_logging(args.get_log_level(), false)?;

    info!("Validating roster {}", args.roster.display());
    validate_roster(&args.roster)
}

/// Validate one roster file, failing when it cannot be billed as-is
pub fn validate_roster(roster: &Path) -> Result<BillingStats> {
    let headers = read_headers(roster)?;
    let diagnostics = validate_headers(&headers);

    let mut service_columns = 0;
    let mut problems = 0;
    for diagnostic in &diagnostics {
        match diagnostic.status {
            ColumnStatus::ServiceColumn => service_columns += 1,
            ColumnStatus::MalformedPlow => {
                problems += 1;
                println!(
                    "{} plow column '{}' has no usable depth",
                    "MALFORMED".red().bold(),
                    diagnostic.column
                );
            }
            ColumnStatus::Unrecognized => {
                println!(
                    "{} column '{}' will be ignored",
                    "UNRECOGNIZED".yellow(),
                    diagnostic.column
                );
            }
        }
    }

    // Required columns and readable rows; also flags rows the summary
    // report would reject.
    let customers = load_roster(roster)?;
    for (row_number, customer) in customers.iter().enumerate() {
        if customer.name.trim().is_empty() {
            problems += 1;
            println!(
                "{} data row {} has an empty customer name",
                "MISSING".red().bold(),
                row_number + 1
            );
        }
        if !customer.has_email() {
            println!(
                "{} {} has no billing email",
                "NO EMAIL".yellow(),
                customer.name
            );
        }
    }

    println!(
        "\n{} customers, {} service columns, {} problem(s)",
        customers.len(),
        service_columns,
        problems
    );

    if problems > 0 {
        return Err(Error::configuration(format!(
            "Roster '{}' has {} problem(s) that would break billing",
            roster.display(),
            problems
        )));
    }

    println!("{}", "Roster is ready to bill".green().bold());

    let mut stats = BillingStats::new();
    stats.customers_processed = customers.len();
    Ok(stats)
}
