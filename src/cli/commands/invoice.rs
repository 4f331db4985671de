//! Invoice command implementation
//!
//! The main billing workflow: load the roster, price every service visit
//! for the requested dates, write invoice documents, and finish with a
//! billing summary report.

use crate::app::services::billing::{BillingStats, RowProcessor};
use crate::app::services::document::{DocumentFormat, InvoiceWriter};
use crate::app::services::roster::load_roster;
use crate::app::services::summary::{aggregate, print_console_table, write_text_report};
use crate::cli::args::InvoiceArgs;
use crate::cli::commands::shared::{load_billing_config, parse_dates, setup_logging};
use crate::Result;
use tracing::info;

/// Run the invoice command
pub fn run_invoice(args: InvoiceArgs) -> Result<BillingStats> {
    args.validate()?;
    setup_logging(args.get_log_level(), args.quiet)?;

    let config = load_billing_config(&args)?;
    let dates = parse_dates(&args.dates)?;

    info!(
        "Billing {} for {} service date(s)",
        args.roster.display(),
        dates.len()
    );

    let customers = load_roster(&args.roster)?;
    let processor = RowProcessor::new(config.fallback_policy);
    let batch = processor.process_batch(&customers, &dates, args.show_progress())?;

    let writer = InvoiceWriter::new(&config.output_dir);
    let format = DocumentFormat::from(args.format);
    if format.wants_text() {
        writer.write_text_document(&config.provider, &batch.rows)?;
    }
    if format.wants_json() {
        writer.write_json_export(&batch.rows)?;
    }

    let statuses = aggregate(&batch.rows)?;
    write_text_report(&writer.report_path(), &statuses)?;
    if !args.quiet {
        print_console_table(&statuses);
        println!("\n{}", batch.stats.summary());
    }

    Ok(batch.stats)
}
