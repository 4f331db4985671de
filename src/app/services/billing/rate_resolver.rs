//! Effective rate resolution for one service cell
//!
//! Applies the fallback precedence: explicit per-cell rate first, then the
//! customer-level PlowRate/SandRate, with skip markers and the paid marker
//! recognized before any numeric interpretation.

use crate::app::models::{CustomerRecord, ServiceKey, ServiceKind};
use crate::config::FallbackPolicy;
use crate::constants::{MIN_EXPLICIT_RATE, NOT_SERVICED_MARKERS, PAID_MARKER};
use crate::{Error, Result};
use tracing::{debug, warn};

/// Outcome of resolving one service cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellOutcome {
    /// Empty or "-" cell: the customer was not serviced that date
    NotServiced,
    /// "P" cell: the customer already paid for that date
    Paid,
    /// A usable base rate (before any depth adjustment)
    Rate(f64),
    /// No usable rate could be resolved; skip this single service
    SkipService,
}

/// Resolve the effective base rate for one service cell
///
/// Decision order:
/// 1. Not-serviced markers produce no line item and no error.
/// 2. The paid marker (any case) marks the customer paid for that date.
/// 3. A numeric cell at or above the minimum threshold is the explicit rate.
/// 4. A numeric cell below the threshold, or a non-numeric cell, falls back
///    to the customer-level rate for the service kind.
///
/// A missing or unparsable fallback rate skips the service for sanding and,
/// depending on `policy`, either skips or aborts for plowing.
pub fn resolve(
    column: &str,
    cell: &str,
    key: &ServiceKey,
    customer: &CustomerRecord,
    policy: FallbackPolicy,
) -> Result<CellOutcome> {
    let cell = cell.trim();

    if NOT_SERVICED_MARKERS.contains(&cell) {
        debug!(
            "{} not serviced on {} ({}): empty cell",
            customer.name, key.date, column
        );
        return Ok(CellOutcome::NotServiced);
    }

    if cell.eq_ignore_ascii_case(PAID_MARKER) {
        debug!("{} marked paid on {} ({})", customer.name, key.date, column);
        return Ok(CellOutcome::Paid);
    }

    // Use the rate from the service cell when it is a valid number; this
    // applies to sanding and plowing columns alike.
    match cell.parse::<f64>() {
        Ok(rate) if rate >= MIN_EXPLICIT_RATE => return Ok(CellOutcome::Rate(rate)),
        Ok(rate) => {
            warn!(
                "Invalid rate {} for {} on {}, using rate from {}Rate column",
                rate,
                customer.name,
                key.date,
                key.kind.tag()
            );
        }
        Err(_) => {
            debug!(
                "Non-numeric cell '{}' for {} on {}, using {}Rate column",
                cell,
                customer.name,
                key.date,
                key.kind.tag()
            );
        }
    }

    let fallback = customer
        .fallback_rate(key.kind)
        .and_then(|raw| raw.trim().parse::<f64>().ok());

    match (fallback, key.kind) {
        (Some(rate), _) => Ok(CellOutcome::Rate(rate)),
        (None, ServiceKind::Sand) => {
            warn!(
                "No valid sand rate for {} on {}, skipping sanding line item",
                customer.name, key.date
            );
            Ok(CellOutcome::SkipService)
        }
        (None, ServiceKind::Plow) => match policy {
            FallbackPolicy::Skip => {
                warn!(
                    "Could not parse rate {:?} in {} for {} -> skipping",
                    customer.plow_rate, column, customer.name
                );
                Ok(CellOutcome::SkipService)
            }
            FallbackPolicy::Fatal => Err(Error::missing_fallback_rate(
                &customer.name,
                &key.date,
                column,
            )),
        },
    }
}
