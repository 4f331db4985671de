//! Command-line argument definitions for the billing tool
//!
//! The complete CLI interface using the clap derive API. Each subcommand
//! owns its arguments and knows how to validate them before any work
//! starts.

use crate::app::services::document::DocumentFormat;
use crate::config::FallbackPolicy;
use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_PROVIDER_FILE, SERVICE_DATE_FORMAT};
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the snow service billing tool
///
/// Turns a service roster spreadsheet (exported as CSV) into invoices
/// for plowing and sanding visits on the requested dates.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "snowbill",
    version,
    about = "Generate snow plowing and sanding invoices from a roster CSV",
    long_about = "Reads a customer roster CSV where each service visit is a dated column, \
                  prices the visits for the requested dates (snow depth tiers, sanding, \
                  shared driveway splits), and writes invoice documents plus a billing \
                  summary report."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the billing tool
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Generate invoices for one or more service dates (default command)
    Invoice(InvoiceArgs),
    /// Print a billing summary without writing invoice documents
    Summary(SummaryArgs),
    /// Check a roster CSV for malformed columns and missing fields
    Validate(ValidateArgs),
}

/// Arguments for the invoice command (main billing run)
#[derive(Debug, Clone, Parser)]
pub struct InvoiceArgs {
    /// Path to the roster CSV
    ///
    /// One row per customer, fixed identity and rate columns plus one
    /// column per service visit named like 01-15-2025_Plow_8.
    #[arg(value_name = "ROSTER", help = "Path to the roster CSV file")]
    pub roster: PathBuf,

    /// Service dates to bill, in MM-DD-YYYY format
    ///
    /// Only service columns matching these dates are billed. Dates are
    /// billed in the order given.
    #[arg(
        value_name = "DATES",
        required = true,
        help = "Service dates to bill (MM-DD-YYYY)"
    )]
    pub dates: Vec<String>,

    /// Provider identity file
    ///
    /// JSON file with the provider's name and address, printed in the
    /// header of every invoice.
    #[arg(
        short = 'p',
        long = "provider",
        value_name = "FILE",
        default_value = DEFAULT_PROVIDER_FILE,
        help = "Path to the provider identity JSON file"
    )]
    pub provider: PathBuf,

    /// Output directory for generated documents
    ///
    /// Created if it doesn't exist. Files are named by billing date,
    /// like 2025-01-20_invoices.txt.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Output directory for invoice documents"
    )]
    pub output: PathBuf,

    /// Document format to write
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Invoice document format"
    )]
    pub format: FormatArg,

    /// Treat a missing fallback plow rate as a fatal error
    ///
    /// By default a plow visit that needs the customer's standing rate
    /// but has none is skipped with a warning.
    #[arg(
        long = "strict-fallback",
        help = "Abort when a plow visit has no usable rate"
    )]
    pub strict_fallback: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    /// Path to the roster CSV
    #[arg(value_name = "ROSTER", help = "Path to the roster CSV file")]
    pub roster: PathBuf,

    /// Service dates to summarise, in MM-DD-YYYY format
    #[arg(
        value_name = "DATES",
        required = true,
        help = "Service dates to summarise (MM-DD-YYYY)"
    )]
    pub dates: Vec<String>,

    /// Write the report to a file instead of only the console
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Directory to write the report file into"
    )]
    pub output: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Path to the roster CSV
    #[arg(value_name = "ROSTER", help = "Path to the roster CSV file")]
    pub roster: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Document format options for the invoice command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Plain-text invoice document
    Text,
    /// JSON export for external renderers
    Json,
    /// Both text and JSON
    Both,
}

impl From<FormatArg> for DocumentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => DocumentFormat::Text,
            FormatArg::Json => DocumentFormat::Json,
            FormatArg::Both => DocumentFormat::Both,
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Parse and validate a list of service date arguments
fn parse_service_dates(dates: &[String]) -> Result<Vec<NaiveDate>> {
    dates
        .iter()
        .map(|date| {
            NaiveDate::parse_from_str(date, SERVICE_DATE_FORMAT)
                .map_err(|source| Error::date_parse(date, source))
        })
        .collect()
}

impl InvoiceArgs {
    /// Validate the invoice command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.roster.exists() {
            return Err(Error::configuration(format!(
                "Roster file does not exist: {}",
                self.roster.display()
            )));
        }

        if !self.provider.exists() {
            return Err(Error::configuration(format!(
                "Provider file does not exist: {}",
                self.provider.display()
            )));
        }

        parse_service_dates(&self.dates)?;

        Ok(())
    }

    /// The fallback policy selected on the command line
    pub fn fallback_policy(&self) -> FallbackPolicy {
        if self.strict_fallback {
            FallbackPolicy::Fatal
        } else {
            FallbackPolicy::Skip
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl SummaryArgs {
    /// Validate the summary command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.roster.exists() {
            return Err(Error::configuration(format!(
                "Roster file does not exist: {}",
                self.roster.display()
            )));
        }

        parse_service_dates(&self.dates)?;

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.roster.exists() {
            return Err(Error::configuration(format!(
                "Roster file does not exist: {}",
                self.roster.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
