//! Batch statistics and result structures for the billing pipeline

use crate::app::models::ProcessedRow;

/// Statistics for one billing batch
#[derive(Debug, Clone, PartialEq)]
pub struct BillingStats {
    /// Number of customer rows processed
    pub customers_processed: usize,
    /// Number of rows that produced an invoice
    pub invoices_generated: usize,
    /// Number of rows that resolved no services at all
    pub no_invoice: usize,
    /// Number of customers with the paid flag set on any target date
    pub paid_customers: usize,
    /// Total line items across all invoices
    pub line_items: usize,
    /// Individual services skipped for missing fallback rates
    pub services_skipped: usize,
    /// Sum of all invoice totals in the batch
    pub grand_total: f64,
    /// Specific warning messages recorded for skipped services
    pub skip_messages: Vec<String>,
}

impl BillingStats {
    /// Create new empty billing statistics
    pub fn new() -> Self {
        Self {
            customers_processed: 0,
            invoices_generated: 0,
            no_invoice: 0,
            paid_customers: 0,
            line_items: 0,
            services_skipped: 0,
            grand_total: 0.0,
            skip_messages: Vec::new(),
        }
    }

    /// Record one skipped service with its context message
    pub fn add_skip(&mut self, message: String) {
        self.services_skipped += 1;
        self.skip_messages.push(message);
    }

    /// Share of processed customers that produced an invoice, as a percentage
    pub fn invoice_rate(&self) -> f64 {
        if self.customers_processed == 0 {
            0.0
        } else {
            (self.invoices_generated as f64 / self.customers_processed as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Billing summary: {} customers -> {} invoices ({:.1}%) | \
             {} line items | ${:.2} total | {} paid | {} services skipped",
            self.customers_processed,
            self.invoices_generated,
            self.invoice_rate(),
            self.line_items,
            self.grand_total,
            self.paid_customers,
            self.services_skipped
        )
    }
}

impl Default for BillingStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of processing a whole roster batch
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Every processed row, in roster order, billed or not
    pub rows: Vec<ProcessedRow>,
    /// Batch statistics
    pub stats: BillingStats,
}

impl BatchResult {
    /// Create a new batch result
    pub fn new(rows: Vec<ProcessedRow>, stats: BillingStats) -> Self {
        Self { rows, stats }
    }

    /// Rows that produced an invoice, in roster order
    pub fn billed_rows(&self) -> impl Iterator<Item = &ProcessedRow> {
        self.rows.iter().filter(|row| row.is_billed())
    }

    /// Number of invoices in the batch
    pub fn invoice_count(&self) -> usize {
        self.stats.invoices_generated
    }
}
