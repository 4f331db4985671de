//! Summary command implementation
//!
//! Prices the requested dates the same way the invoice command does but
//! stops at the per-customer summary. Nothing is invoiced; the report
//! can optionally be written to a file.

use crate::app::services::billing::{BillingStats, RowProcessor};
use crate::app::services::document::InvoiceWriter;
use crate::app::services::roster::load_roster;
use crate::app::services::summary::{aggregate, print_console_table, write_text_report};
use crate::cli::args::SummaryArgs;
use crate::cli::commands::shared::{parse_dates, setup_logging};
use crate::config::FallbackPolicy;
use crate::Result;
use tracing::info;

/// Run the summary command
pub fn run_summary(args: SummaryArgs) -> Result<BillingStats> {
    args.validate()?;
    setup_logging(args.get_log_level(), false)?;

    let dates = parse_dates(&args.dates)?;
    info!(
        "Summarising {} for {} service date(s)",
        args.roster.display(),
        dates.len()
    );

    let customers = load_roster(&args.roster)?;
    let processor = RowProcessor::new(FallbackPolicy::Skip);
    let batch = processor.process_batch(&customers, &dates, false)?;

    let statuses = aggregate(&batch.rows)?;
    print_console_table(&statuses);
    println!("\n{}", batch.stats.summary());

    if let Some(output) = &args.output {
        std::fs::create_dir_all(output)?;
        let writer = InvoiceWriter::new(output);
        write_text_report(&writer.report_path(), &statuses)?;
    }

    Ok(batch.stats)
}
