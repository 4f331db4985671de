//! Service column decoding
//!
//! Turns a raw roster column name into a typed [`ServiceKey`] for one
//! target date, separating "is this a service column for this date" from
//! "what does it mean".

use crate::app::models::ServiceKey;
use crate::constants::{SERVICE_TAG_PLOW, SERVICE_TAG_SAND};
use crate::{Error, Result};
use tracing::debug;

/// Decode a column name against one target date
///
/// A column qualifies only if it starts with the date (MM-DD-YYYY). The
/// qualifying suffix is split on underscores into a service tag and, for
/// plowing, a depth token plus optional trailing note tokens which are
/// rejoined with spaces.
///
/// Returns `Ok(None)` for columns that do not belong to the date or do not
/// carry a known service tag; those are simply not service columns. Returns
/// an error only for a plow column whose depth token is not an integer,
/// which aborts the whole batch.
pub fn decode_service_column(
    column: &str,
    date: &str,
    customer: &str,
) -> Result<Option<ServiceKey>> {
    let Some(suffix) = column.strip_prefix(date) else {
        return Ok(None);
    };
    let Some(suffix) = suffix.strip_prefix('_') else {
        return Ok(None);
    };

    let mut tokens = suffix.split('_');
    match tokens.next() {
        Some(tag) if tag == SERVICE_TAG_PLOW => {
            let depth = tokens
                .next()
                .and_then(|token| token.parse::<u32>().ok())
                .ok_or_else(|| Error::depth_parse(column, customer))?;

            let note: Vec<&str> = tokens.collect();
            let note = if note.is_empty() {
                None
            } else {
                Some(note.join(" "))
            };

            Ok(Some(ServiceKey::plow(date, depth, note)))
        }
        Some(tag) if tag == SERVICE_TAG_SAND => {
            // Sanding never carries a depth; any trailing tokens are noise.
            if tokens.next().is_some() {
                debug!("Ignoring extra tokens in sand column '{}'", column);
            }
            Ok(Some(ServiceKey::sand(date)))
        }
        _ => Ok(None),
    }
}
