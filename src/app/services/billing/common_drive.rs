//! Shared-driveway charge splitting
//!
//! Some customers share a driveway segment that is billed separately from
//! the private portion. When the customer carries a usable CommonRate, a
//! plow event produces two line items; otherwise exactly one.

use super::depth_tier;
use crate::app::models::{CustomerRecord, LineItem};
use tracing::{debug, warn};

/// Build the line items for one plow event
///
/// With a parsable CommonRate the shared segment is billed first at the
/// depth-adjusted common rate and the base description gains a
/// "Private Drive" suffix before the private portion is priced. A missing
/// or unparsable CommonRate silently yields the single unsuffixed item.
///
/// An off-table depth (above 32") falls back to the unadjusted rate for
/// both portions; the charge is never dropped.
pub fn plow_line_items(
    customer: &CustomerRecord,
    depth: u32,
    base_rate: f64,
    mut description: String,
) -> Vec<LineItem> {
    let mut items = Vec::with_capacity(2);

    let common_rate = customer
        .common_rate
        .as_deref()
        .and_then(|raw| raw.trim().parse::<f64>().ok());

    match common_rate {
        Some(common_rate) => {
            let adjusted = depth_tier::adjust(depth, common_rate).unwrap_or_else(|| {
                warn!(
                    "Unusual snow depth of {}\" for {}, using common rate",
                    depth, customer.name
                );
                common_rate
            });
            items.push(LineItem::new(
                format!("{}   Common Drive", description),
                adjusted,
            ));
            description.push_str("   Private Drive");
        }
        None => {
            if customer.common_rate.is_some() {
                debug!(
                    "Unparsable CommonRate {:?} for {}, no common-drive split",
                    customer.common_rate, customer.name
                );
            }
        }
    }

    let adjusted = depth_tier::adjust(depth, base_rate).unwrap_or_else(|| {
        warn!(
            "Unusual snow depth of {}\" for {}, using base rate",
            depth, customer.name
        );
        base_rate
    });
    items.push(LineItem::new(description, adjusted));

    items
}
