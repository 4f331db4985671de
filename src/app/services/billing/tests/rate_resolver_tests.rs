//! Tests for rate resolution and fallback precedence

use super::create_test_customer;
use crate::app::models::ServiceKey;
use crate::app::services::billing::rate_resolver::{resolve, CellOutcome};
use crate::config::FallbackPolicy;
use crate::Error;

const DATE: &str = "01-15-2025";
const COLUMN: &str = "01-15-2025_Plow_8";

fn plow_key() -> ServiceKey {
    ServiceKey::plow(DATE, 8, None)
}

fn sand_key() -> ServiceKey {
    ServiceKey::sand(DATE)
}

#[test]
fn test_empty_and_dash_cells_mean_not_serviced() {
    let customer = create_test_customer("A", Some("20"), None, None, &[]);
    for cell in ["", "-"] {
        let outcome = resolve(COLUMN, cell, &plow_key(), &customer, FallbackPolicy::Skip).unwrap();
        assert_eq!(outcome, CellOutcome::NotServiced);
    }
}

#[test]
fn test_paid_marker_any_case() {
    let customer = create_test_customer("A", Some("20"), None, None, &[]);
    for cell in ["P", "p"] {
        let outcome = resolve(COLUMN, cell, &plow_key(), &customer, FallbackPolicy::Skip).unwrap();
        assert_eq!(outcome, CellOutcome::Paid);
    }
}

#[test]
fn test_explicit_rate_at_threshold_used_verbatim() {
    // An explicit cell rate wins over any configured fallback.
    let customer = create_test_customer("A", Some("99"), None, None, &[]);
    let outcome = resolve(COLUMN, "15", &plow_key(), &customer, FallbackPolicy::Skip).unwrap();
    assert_eq!(outcome, CellOutcome::Rate(15.0));

    let outcome = resolve(COLUMN, "10", &plow_key(), &customer, FallbackPolicy::Skip).unwrap();
    assert_eq!(outcome, CellOutcome::Rate(10.0));
}

#[test]
fn test_low_explicit_rate_falls_back_to_column_rate() {
    let customer = create_test_customer("A", Some("20"), None, None, &[]);
    let outcome = resolve(COLUMN, "5", &plow_key(), &customer, FallbackPolicy::Skip).unwrap();
    assert_eq!(outcome, CellOutcome::Rate(20.0));
}

#[test]
fn test_non_numeric_cell_falls_back_to_column_rate() {
    let customer = create_test_customer("A", Some("20"), Some("12"), None, &[]);
    let outcome = resolve(COLUMN, "x", &plow_key(), &customer, FallbackPolicy::Skip).unwrap();
    assert_eq!(outcome, CellOutcome::Rate(20.0));

    let outcome = resolve("01-15-2025_Sand", "x", &sand_key(), &customer, FallbackPolicy::Skip)
        .unwrap();
    assert_eq!(outcome, CellOutcome::Rate(12.0));
}

#[test]
fn test_missing_sand_fallback_skips_service() {
    let customer = create_test_customer("A", Some("20"), None, None, &[]);
    let outcome = resolve("01-15-2025_Sand", "x", &sand_key(), &customer, FallbackPolicy::Skip)
        .unwrap();
    assert_eq!(outcome, CellOutcome::SkipService);
}

#[test]
fn test_unparsable_sand_fallback_skips_service() {
    let customer = create_test_customer("A", Some("20"), Some("n/a"), None, &[]);
    let outcome = resolve("01-15-2025_Sand", "x", &sand_key(), &customer, FallbackPolicy::Skip)
        .unwrap();
    assert_eq!(outcome, CellOutcome::SkipService);
}

#[test]
fn test_missing_plow_fallback_skips_under_default_policy() {
    let customer = create_test_customer("A", None, None, None, &[]);
    let outcome = resolve(COLUMN, "x", &plow_key(), &customer, FallbackPolicy::Skip).unwrap();
    assert_eq!(outcome, CellOutcome::SkipService);
}

#[test]
fn test_missing_plow_fallback_aborts_under_strict_policy() {
    let customer = create_test_customer("SMITH", None, None, None, &[]);
    let err = resolve(COLUMN, "x", &plow_key(), &customer, FallbackPolicy::Fatal).unwrap_err();
    match err {
        Error::MissingFallbackRate {
            customer,
            date,
            column,
        } => {
            assert_eq!(customer, "SMITH");
            assert_eq!(date, DATE);
            assert_eq!(column, COLUMN);
        }
        other => panic!("Expected MissingFallbackRate error, got {:?}", other),
    }
}

#[test]
fn test_whitespace_around_cell_values_is_tolerated() {
    let customer = create_test_customer("A", Some("20"), None, None, &[]);
    let outcome = resolve(COLUMN, " 15 ", &plow_key(), &customer, FallbackPolicy::Skip).unwrap();
    assert_eq!(outcome, CellOutcome::Rate(15.0));
}
