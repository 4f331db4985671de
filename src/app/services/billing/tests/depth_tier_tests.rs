//! Tests for the depth tier adjuster

use crate::app::services::billing::depth_tier::adjust;

#[test]
fn test_base_tier_returns_rate_unchanged() {
    assert_eq!(adjust(0, 20.0), Some(20.0));
    assert_eq!(adjust(1, 20.0), Some(20.0));
    assert_eq!(adjust(6, 20.0), Some(20.0));
}

#[test]
fn test_tier_boundaries_for_base_rate_20() {
    // Each tier applies from one past the previous maximum up to its own.
    assert_eq!(adjust(7, 20.0), Some(30.0));
    assert_eq!(adjust(9, 20.0), Some(30.0));
    assert_eq!(adjust(10, 20.0), Some(45.0));
    assert_eq!(adjust(12, 20.0), Some(45.0));
    assert_eq!(adjust(13, 20.0), Some(60.0));
    assert_eq!(adjust(18, 20.0), Some(60.0));
    assert_eq!(adjust(19, 20.0), Some(75.0));
    assert_eq!(adjust(24, 20.0), Some(75.0));
    assert_eq!(adjust(25, 20.0), Some(90.0));
    assert_eq!(adjust(32, 20.0), Some(90.0));
}

#[test]
fn test_depth_beyond_table_is_undefined() {
    assert_eq!(adjust(33, 20.0), None);
    assert_eq!(adjust(100, 20.0), None);
}

#[test]
fn test_adjustment_truncates_toward_zero() {
    // 10 * 2.25 = 22.5 must bill as 22, never 23.
    assert_eq!(adjust(10, 10.0), Some(22.0));
    // 15 * 1.5 = 22.5 likewise.
    assert_eq!(adjust(7, 15.0), Some(22.0));
    // 25 * 3.75 = 93.75 -> 93.
    assert_eq!(adjust(20, 25.0), Some(93.0));
}

#[test]
fn test_base_tier_does_not_truncate() {
    // The <= 6" tier passes the rate through untouched, fractional or not.
    assert_eq!(adjust(4, 22.5), Some(22.5));
}
