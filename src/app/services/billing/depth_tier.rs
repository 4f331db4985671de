//! Depth tier rate adjustment
//!
//! A fixed tier table maps snow depth to a rate multiplier. The table is
//! part of the customer agreement; it is not configurable.

use crate::constants::DEPTH_TIERS;

/// Adjust a base rate for snow depth
///
/// Depths of six inches or less bill at the base rate unchanged. Deeper
/// tiers multiply the base rate and truncate the result toward zero to a
/// whole dollar amount. Returns `None` for depths beyond the tier
/// table (above 32"), in which case the caller bills the unadjusted base
/// rate rather than dropping the charge.
pub fn adjust(depth: u32, base_rate: f64) -> Option<f64> {
    let (first_tier_max, _) = DEPTH_TIERS[0];
    if depth <= first_tier_max {
        return Some(base_rate);
    }

    DEPTH_TIERS
        .iter()
        .find(|(max_depth, _)| depth <= *max_depth)
        .map(|(_, multiplier)| (base_rate * multiplier).trunc())
}
