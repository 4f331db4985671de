//! Invoice batch writing
//!
//! One text document per batch, one page per invoice: provider block,
//! customer block with account, billing date, invoice number and terms,
//! then the line-item table and total. The JSON export carries the same
//! records with money as 2-fraction-digit decimal strings, which is the
//! contract the external renderer expects.

use crate::app::models::{CustomerRecord, InvoiceRecord, ProcessedRow};
use crate::config::Provider;
use crate::Result;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Which document outputs a billing run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Text,
    Json,
    Both,
}

impl DocumentFormat {
    pub fn wants_text(&self) -> bool {
        matches!(self, DocumentFormat::Text | DocumentFormat::Both)
    }

    pub fn wants_json(&self) -> bool {
        matches!(self, DocumentFormat::Json | DocumentFormat::Both)
    }
}

/// One exported invoice, money pre-formatted for the renderer
#[derive(Debug, Serialize)]
struct InvoiceExport<'a> {
    invoice_number: String,
    name: &'a str,
    address: &'a str,
    city_state_zip: &'a str,
    account: &'a str,
    email: &'a str,
    terms: &'a str,
    line_items: Vec<LineItemExport<'a>>,
    total: String,
}

#[derive(Debug, Serialize)]
struct LineItemExport<'a> {
    quantity: u32,
    description: &'a str,
    rate: String,
    amount: String,
}

/// Writer for invoice documents and exports
#[derive(Debug, Clone)]
pub struct InvoiceWriter {
    output_dir: PathBuf,
    billing_date: NaiveDate,
}

impl InvoiceWriter {
    /// Create a writer billing as of today
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            billing_date: Local::now().date_naive(),
        }
    }

    /// Override the billing date (date-stable output for tests)
    pub fn with_billing_date(mut self, billing_date: NaiveDate) -> Self {
        self.billing_date = billing_date;
        self
    }

    /// Invoice number for one account: YYMMDD.{account}
    pub fn invoice_number(&self, account: &str) -> String {
        format!("{}.{}", self.billing_date.format("%y%m%d"), account)
    }

    /// Path of the text invoice document
    pub fn text_document_path(&self) -> PathBuf {
        self.dated_path("invoices", "txt")
    }

    /// Path of the JSON export
    pub fn json_export_path(&self) -> PathBuf {
        self.dated_path("invoices", "json")
    }

    /// Path of the summary report file
    pub fn report_path(&self) -> PathBuf {
        self.dated_path("report", "txt")
    }

    fn dated_path(&self, stem: &str, ext: &str) -> PathBuf {
        self.output_dir.join(format!(
            "{}_{}.{}",
            self.billing_date.format("%Y-%m-%d"),
            stem,
            ext
        ))
    }

    /// Write the text invoice document for every billed row
    pub fn write_text_document(
        &self,
        provider: &Provider,
        rows: &[ProcessedRow],
    ) -> Result<PathBuf> {
        let pages: Vec<String> = rows
            .iter()
            .filter_map(|row| {
                row.invoice
                    .as_ref()
                    .map(|invoice| self.render_invoice_page(provider, &row.customer, invoice))
            })
            .collect();

        let path = self.text_document_path();
        fs::write(&path, pages.join("\n"))?;
        info!("Wrote {} invoices to {}", pages.len(), path.display());
        Ok(path)
    }

    /// Write the JSON export for every billed row
    pub fn write_json_export(&self, rows: &[ProcessedRow]) -> Result<PathBuf> {
        let exports: Vec<InvoiceExport<'_>> = rows
            .iter()
            .filter_map(|row| {
                let invoice = row.invoice.as_ref()?;
                Some(InvoiceExport {
                    invoice_number: self.invoice_number(&row.customer.account),
                    name: &row.customer.name,
                    address: &row.customer.address,
                    city_state_zip: &row.customer.city_state_zip,
                    account: &row.customer.account,
                    email: &row.customer.email,
                    terms: &row.customer.terms,
                    line_items: invoice
                        .line_items
                        .iter()
                        .map(|item| LineItemExport {
                            quantity: item.quantity,
                            description: &item.description,
                            rate: item.formatted_rate(),
                            amount: item.formatted_amount(),
                        })
                        .collect(),
                    total: invoice.formatted_total(),
                })
            })
            .collect();

        let path = self.json_export_path();
        fs::write(&path, serde_json::to_string_pretty(&exports)?)?;
        info!("Wrote {} invoices to {}", exports.len(), path.display());
        Ok(path)
    }

    /// Render one invoice as a text page
    fn render_invoice_page(
        &self,
        provider: &Provider,
        customer: &CustomerRecord,
        invoice: &InvoiceRecord,
    ) -> String {
        debug!("Rendering invoice page for {}", customer.name);

        let mut page = String::new();
        page.push_str(&"=".repeat(78));
        page.push('\n');
        page.push_str(&format!("{:<60}{:>18}\n", provider.name, "INVOICE"));
        page.push_str(&format!("{}\n", provider.address1));
        page.push_str(&format!("{}\n\n", provider.city_state_zip()));

        page.push_str(&format!(
            "Customer E-mail: {}   Acct: {}   Date: {}   Invoice: {}\n\n",
            customer.email,
            customer.account,
            self.billing_date.format("%m/%d/%Y"),
            self.invoice_number(&customer.account)
        ));

        page.push_str("Bill To:\n");
        page.push_str(&format!("  {}\n", customer.name));
        page.push_str(&format!("  {}\n", customer.address));
        page.push_str(&format!("  {}\n\n", customer.city_state_zip));
        page.push_str(&format!("Terms: {}\n\n", customer.terms));

        page.push_str(&format!(
            "{:>8}  {:<48}{:>9}{:>11}\n",
            "Quantity", "Description", "Rate", "Amount"
        ));
        for item in &invoice.line_items {
            page.push_str(&format!(
                "{:>8}  {:<48}{:>9}{:>11}\n",
                item.quantity,
                item.description,
                item.formatted_rate(),
                item.formatted_amount()
            ));
        }
        page.push_str(&format!(
            "{:>8}  {:<48}{:>9}{:>11}\n",
            "", "Total:", "", invoice.formatted_total()
        ));

        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{CustomerRecord, InvoiceRecord, LineItem};
    use tempfile::TempDir;

    fn test_provider() -> Provider {
        Provider {
            name: "North Ridge Plowing".to_string(),
            address1: "12 Mill Rd".to_string(),
            city: "Barton".to_string(),
            state: "VT".to_string(),
            postal_code: "05822".to_string(),
        }
    }

    fn billed_row() -> ProcessedRow {
        ProcessedRow {
            customer: CustomerRecord {
                name: "JANE SMITH".to_string(),
                address: "1 Elm St".to_string(),
                city_state_zip: "Barton, VT 05822".to_string(),
                account: "1042".to_string(),
                email: "jane@example.com".to_string(),
                terms: "Net 30".to_string(),
                plow_rate: Some("20".to_string()),
                sand_rate: None,
                common_rate: None,
                services: Vec::new(),
            },
            invoice: InvoiceRecord::from_line_items(vec![LineItem::new(
                "Snow Plowing on 01-15-2025 @ 8\" ",
                30.0,
            )]),
            paid: false,
        }
    }

    fn unbilled_row() -> ProcessedRow {
        let mut row = billed_row();
        row.invoice = None;
        row
    }

    fn test_writer(dir: &TempDir) -> InvoiceWriter {
        InvoiceWriter::new(dir.path())
            .with_billing_date(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap())
    }

    #[test]
    fn test_invoice_number_embeds_billing_date_and_account() {
        let dir = TempDir::new().unwrap();
        assert_eq!(test_writer(&dir).invoice_number("1042"), "250120.1042");
    }

    #[test]
    fn test_dated_output_paths() {
        let dir = TempDir::new().unwrap();
        let writer = test_writer(&dir);
        assert!(writer
            .text_document_path()
            .ends_with("2025-01-20_invoices.txt"));
        assert!(writer
            .json_export_path()
            .ends_with("2025-01-20_invoices.json"));
        assert!(writer.report_path().ends_with("2025-01-20_report.txt"));
    }

    #[test]
    fn test_text_document_contains_invoice_fields() {
        let dir = TempDir::new().unwrap();
        let writer = test_writer(&dir);

        let path = writer
            .write_text_document(&test_provider(), &[billed_row(), unbilled_row()])
            .unwrap();
        let contents = fs::read_to_string(path).unwrap();

        assert!(contents.contains("North Ridge Plowing"));
        assert!(contents.contains("INVOICE"));
        assert!(contents.contains("JANE SMITH"));
        assert!(contents.contains("Invoice: 250120.1042"));
        assert!(contents.contains("Snow Plowing on 01-15-2025 @ 8\""));
        assert!(contents.contains("30.00"));
        assert!(contents.contains("Total:"));
        // The unbilled customer gets no page.
        assert_eq!(contents.matches("INVOICE").count(), 1);
    }

    #[test]
    fn test_json_export_shape() {
        let dir = TempDir::new().unwrap();
        let writer = test_writer(&dir);

        let path = writer
            .write_json_export(&[billed_row(), unbilled_row()])
            .unwrap();
        let contents = fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();

        let exports = parsed.as_array().unwrap();
        assert_eq!(exports.len(), 1);
        assert_eq!(exports[0]["invoice_number"], "250120.1042");
        assert_eq!(exports[0]["total"], "30.00");
        assert_eq!(exports[0]["line_items"][0]["rate"], "30.00");
        assert_eq!(exports[0]["line_items"][0]["quantity"], 1);
    }
}
