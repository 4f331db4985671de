//! Row processor implementation and batch orchestration
//!
//! Walks one customer row across all target dates, runs each qualifying
//! cell through rate resolution, depth adjustment, and common-drive
//! splitting, and emits an invoice record when any line items accumulated.

use super::common_drive;
use super::rate_resolver::{self, CellOutcome};
use super::service_key::decode_service_column;
use super::stats::{BatchResult, BillingStats};
use crate::app::models::{CustomerRecord, InvoiceRecord, LineItem, ProcessedRow, ServiceKind};
use crate::config::FallbackPolicy;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Row processor for the billing batch
///
/// The processor never mutates a [`CustomerRecord`]; it returns a new
/// [`ProcessedRow`] carrying the untouched record alongside the derived
/// invoice, which makes reprocessing idempotent.
#[derive(Debug, Clone)]
pub struct RowProcessor {
    fallback_policy: FallbackPolicy,
}

impl RowProcessor {
    /// Create a processor with the given missing-plow-fallback policy
    pub fn new(fallback_policy: FallbackPolicy) -> Self {
        Self { fallback_policy }
    }

    /// Process one customer row across all target dates
    ///
    /// Dates are visited in caller order; within a date, qualifying columns
    /// are visited in roster column order, so line items land in date order
    /// then column order. Returns the fatal error of the batch, if any;
    /// per-cell irregularities are logged and folded into `stats`.
    pub fn process_row(
        &self,
        customer: &CustomerRecord,
        dates: &[String],
        stats: &mut BillingStats,
    ) -> Result<ProcessedRow> {
        let mut items = Vec::new();
        let mut paid = false;

        for date in dates {
            for (column, cell) in &customer.services {
                let Some(key) = decode_service_column(column, date, &customer.name)? else {
                    continue;
                };

                match rate_resolver::resolve(column, cell, &key, customer, self.fallback_policy)? {
                    CellOutcome::NotServiced => continue,
                    CellOutcome::Paid => paid = true,
                    CellOutcome::SkipService => {
                        stats.add_skip(format!(
                            "{}: skipped {} on {} (no usable rate)",
                            customer.name, column, date
                        ));
                    }
                    CellOutcome::Rate(base_rate) => match key.kind {
                        ServiceKind::Plow => {
                            // Depth is guaranteed for a decoded plow key.
                            let depth = key.depth.unwrap_or_default();
                            items.extend(common_drive::plow_line_items(
                                customer,
                                depth,
                                base_rate,
                                key.description(),
                            ));
                        }
                        ServiceKind::Sand => {
                            items.push(LineItem::new(key.description(), base_rate));
                        }
                    },
                }
            }
        }

        let invoice = InvoiceRecord::from_line_items(items);
        if invoice.is_none() {
            debug!("No services found for {}, no invoice", customer.name);
        }

        Ok(ProcessedRow {
            customer: customer.clone(),
            invoice,
            paid,
        })
    }

    /// Process every roster row against the target dates
    ///
    /// Aborts on the first fatal error with no partial output. The progress
    /// bar is only worth showing for interactive runs; pass `false` when
    /// quiet or when stderr is not a terminal.
    pub fn process_batch(
        &self,
        customers: &[CustomerRecord],
        dates: &[String],
        show_progress: bool,
    ) -> Result<BatchResult> {
        let mut stats = BillingStats::new();
        let mut rows = Vec::with_capacity(customers.len());

        info!(
            "Processing {} customers across {} service dates",
            customers.len(),
            dates.len()
        );

        let progress = if show_progress {
            Some(Self::create_billing_progress_bar(customers.len() as u64))
        } else {
            None
        };

        for customer in customers {
            let row = self.process_row(customer, dates, &mut stats)?;

            stats.customers_processed += 1;
            if let Some(invoice) = &row.invoice {
                stats.invoices_generated += 1;
                stats.line_items += invoice.line_items.len();
                stats.grand_total += invoice.total;
            } else {
                stats.no_invoice += 1;
            }
            if row.paid {
                stats.paid_customers += 1;
            }

            rows.push(row);
            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message(format!("Billed {} customers", stats.invoices_generated));
        }

        info!("{}", stats.summary());

        Ok(BatchResult::new(rows, stats))
    }

    /// Create a progress bar for batch billing
    fn create_billing_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Billing customers".to_string());
        pb
    }
}
