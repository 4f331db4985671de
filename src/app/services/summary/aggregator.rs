//! Per-customer status aggregation
//!
//! Pure, order-preserving reduction of the processed batch. Every customer
//! appears exactly once, billed or not; a row without a display name cannot
//! be reported and fails the whole summary.

use crate::app::models::{CustomerStatus, ProcessedRow};
use crate::{Error, Result};

/// Reduce processed rows to one status record per customer
pub fn aggregate(rows: &[ProcessedRow]) -> Result<Vec<CustomerStatus>> {
    rows.iter()
        .enumerate()
        .map(|(row_number, row)| {
            if row.customer.name.trim().is_empty() {
                return Err(Error::missing_field(
                    crate::constants::columns::BILL_TO_1,
                    row_number + 1,
                ));
            }

            Ok(CustomerStatus {
                name: row.customer.name.clone(),
                total: row.invoice.as_ref().map(|invoice| invoice.formatted_total()),
                paid: row.paid,
                has_email: row.customer.has_email(),
            })
        })
        .collect()
}
