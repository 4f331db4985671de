//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, and date parsing used by more
//! than one subcommand.

use crate::cli::args::InvoiceArgs;
use crate::config::{BillingConfig, Provider};
use crate::constants::SERVICE_DATE_FORMAT;
use crate::{Error, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Set up structured logging for a subcommand
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("snowbill={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build the billing configuration from invoice command arguments
pub fn load_billing_config(args: &InvoiceArgs) -> Result<BillingConfig> {
    info!("Loading provider identity from {}", args.provider.display());

    let provider = Provider::from_json_file(&args.provider)?;

    let config = BillingConfig::new(provider)
        .with_fallback_policy(args.fallback_policy())
        .with_output_dir(&args.output);

    config.validate()?;
    config.ensure_output_directory()?;

    Ok(config)
}

/// Parse billing dates from their command-line form, preserving order
pub fn parse_dates(dates: &[String]) -> Result<Vec<String>> {
    for date in dates {
        NaiveDate::parse_from_str(date, SERVICE_DATE_FORMAT)
            .map_err(|source| Error::date_parse(date, source))?;
    }
    Ok(dates.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_dates_preserves_order() {
        let dates = parse_dates(&["02-01-2025".to_string(), "01-15-2025".to_string()]).unwrap();
        assert_eq!(dates, vec!["02-01-2025", "01-15-2025"]);
    }

    #[test]
    fn test_parse_dates_rejects_malformed() {
        assert!(parse_dates(&["2025-01-15".to_string()]).is_err());
        assert!(parse_dates(&["not-a-date".to_string()]).is_err());
    }

    #[test]
    fn test_load_billing_config() {
        let mut provider_file = NamedTempFile::new().unwrap();
        write!(
            provider_file,
            r#"{{"name": "North Ridge Plowing", "address1": "12 Mill Rd",
                "city": "Barton", "state": "VT", "postalCode": "05822"}}"#
        )
        .unwrap();

        let output_dir = tempfile::TempDir::new().unwrap();
        let args = InvoiceArgs {
            roster: provider_file.path().to_path_buf(),
            dates: vec!["01-15-2025".to_string()],
            provider: provider_file.path().to_path_buf(),
            output: output_dir.path().join("invoices"),
            format: crate::cli::args::FormatArg::Text,
            strict_fallback: true,
            verbose: 0,
            quiet: false,
        };

        let config = load_billing_config(&args).unwrap();
        assert_eq!(config.provider.name, "North Ridge Plowing");
        assert_eq!(config.fallback_policy, crate::config::FallbackPolicy::Fatal);
        assert!(config.output_dir.exists());
    }
}
