//! Core data structures for roster billing.
//!
//! Defines the customer record read from the roster, the decoded service
//! key, invoice line items, and the per-customer processing and summary
//! outputs used throughout the library.

use serde::{Deserialize, Serialize};

/// The kind of billable service encoded in a dated column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    Plow,
    Sand,
}

impl ServiceKind {
    /// Tag as it appears in roster column names
    pub fn tag(&self) -> &'static str {
        match self {
            ServiceKind::Plow => crate::constants::SERVICE_TAG_PLOW,
            ServiceKind::Sand => crate::constants::SERVICE_TAG_SAND,
        }
    }
}

/// A decoded service column for one target date
///
/// Derived deterministically from a column name. `Plow` always carries a
/// depth; `Sand` never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceKey {
    /// Service date in MM-DD-YYYY form
    pub date: String,
    pub kind: ServiceKind,
    /// Snow depth in inches (plowing only)
    pub depth: Option<u32>,
    /// Free-form note tokens trailing the depth, e.g. "slush"
    pub note: Option<String>,
}

impl ServiceKey {
    /// Create a plow key
    pub fn plow(date: impl Into<String>, depth: u32, note: Option<String>) -> Self {
        Self {
            date: date.into(),
            kind: ServiceKind::Plow,
            depth: Some(depth),
            note,
        }
    }

    /// Create a sand key
    pub fn sand(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            kind: ServiceKind::Sand,
            depth: None,
            note: None,
        }
    }

    /// Generate the base line-item description for this service
    pub fn description(&self) -> String {
        match self.kind {
            ServiceKind::Plow => {
                let depth = self.depth.unwrap_or_default();
                let mut description = format!("Snow Plowing on {} @ {}\" ", self.date, depth);
                if let Some(note) = &self.note {
                    description.push_str(note);
                }
                description
            }
            ServiceKind::Sand => format!("Sanding on {}", self.date),
        }
    }
}

/// One customer row read from the roster
///
/// Fixed billing fields plus the open, roster-ordered mapping from dated
/// column names to raw cell text. Immutable once read; processing derives
/// new values instead of writing back into the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Display name, also the first billing address line ("Bill to 1")
    pub name: String,
    /// Street address line ("Bill to 2")
    pub address: String,
    /// City, state and zip line ("Bill to 3")
    pub city_state_zip: String,
    /// Account number ("Account No.")
    pub account: String,
    /// Contact email, empty when the customer has none
    pub email: String,
    /// Payment terms
    pub terms: String,
    /// Raw customer-level fallback rate for plowing, if the cell was non-empty
    pub plow_rate: Option<String>,
    /// Raw customer-level fallback rate for sanding
    pub sand_rate: Option<String>,
    /// Raw shared-driveway rate
    pub common_rate: Option<String>,
    /// Dated service cells as (column name, raw cell text), in roster order
    pub services: Vec<(String, String)>,
}

impl CustomerRecord {
    /// Raw fallback rate for the given service kind
    pub fn fallback_rate(&self, kind: ServiceKind) -> Option<&str> {
        match kind {
            ServiceKind::Plow => self.plow_rate.as_deref(),
            ServiceKind::Sand => self.sand_rate.as_deref(),
        }
    }

    /// Whether the customer has a contact email on file
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }
}

/// One invoice line
///
/// Rate and amount are equal for every line in this domain; there is no
/// per-unit multiplication and quantity is always 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: u32,
    pub description: String,
    pub rate: f64,
    pub amount: f64,
}

impl LineItem {
    /// Create a line item for a single service at the given rate
    pub fn new(description: impl Into<String>, rate: f64) -> Self {
        Self {
            quantity: 1,
            description: description.into(),
            rate,
            amount: rate,
        }
    }

    /// Rate formatted with two fraction digits for the renderer
    pub fn formatted_rate(&self) -> String {
        format!("{:.2}", self.rate)
    }

    /// Amount formatted with two fraction digits for the renderer
    pub fn formatted_amount(&self) -> String {
        format!("{:.2}", self.amount)
    }
}

/// A structured invoice derived from one customer row
///
/// Line items are kept in insertion order (date order, then roster column
/// order within a date). The total is always the sum of the line amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub line_items: Vec<LineItem>,
    pub total: f64,
}

impl InvoiceRecord {
    /// Build an invoice from accumulated line items, deriving the total
    ///
    /// Returns `None` for an empty item list: a customer with no resolved
    /// services never produces an invoice.
    pub fn from_line_items(line_items: Vec<LineItem>) -> Option<Self> {
        if line_items.is_empty() {
            return None;
        }
        let total = line_items.iter().map(|item| item.amount).sum();
        Some(Self { line_items, total })
    }

    /// Total formatted with two fraction digits
    pub fn formatted_total(&self) -> String {
        format!("{:.2}", self.total)
    }
}

/// Result of processing one roster row
///
/// Pure-transform output: the original record travels untouched next to
/// the derived invoice (if any) and the paid flag observed on any date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRow {
    pub customer: CustomerRecord,
    pub invoice: Option<InvoiceRecord>,
    pub paid: bool,
}

impl ProcessedRow {
    /// Whether this row contributes an invoice to the billing batch
    pub fn is_billed(&self) -> bool {
        self.invoice.is_some()
    }
}

/// One-line status record for the summary report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerStatus {
    pub name: String,
    /// Formatted invoice total, or `None` for "No Invoice"
    pub total: Option<String>,
    pub paid: bool,
    pub has_email: bool,
}
