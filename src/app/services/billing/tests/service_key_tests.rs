//! Tests for service column decoding

use crate::app::models::{ServiceKey, ServiceKind};
use crate::app::services::billing::service_key::decode_service_column;
use crate::Error;

const DATE: &str = "12-25-2024";

#[test]
fn test_decodes_plow_column_with_depth() {
    let key = decode_service_column("12-25-2024_Plow_4", DATE, "TEST")
        .unwrap()
        .unwrap();
    assert_eq!(key, ServiceKey::plow(DATE, 4, None));
}

#[test]
fn test_decodes_plow_column_with_note() {
    let key = decode_service_column("12-25-2024_Plow_4_slush", DATE, "TEST")
        .unwrap()
        .unwrap();
    assert_eq!(key.depth, Some(4));
    assert_eq!(key.note.as_deref(), Some("slush"));
}

#[test]
fn test_rejoins_multiple_note_tokens_with_spaces() {
    let key = decode_service_column("12-25-2024_Plow_12_wet_heavy", DATE, "TEST")
        .unwrap()
        .unwrap();
    assert_eq!(key.note.as_deref(), Some("wet heavy"));
}

#[test]
fn test_decodes_sand_column_without_depth() {
    let key = decode_service_column("12-25-2024_Sand", DATE, "TEST")
        .unwrap()
        .unwrap();
    assert_eq!(key.kind, ServiceKind::Sand);
    assert_eq!(key.depth, None);
    assert_eq!(key.note, None);
}

#[test]
fn test_column_for_other_date_is_ignored() {
    let result = decode_service_column("12-26-2024_Plow_4", DATE, "TEST").unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_fixed_columns_are_ignored() {
    assert_eq!(decode_service_column("PlowRate", DATE, "TEST").unwrap(), None);
    assert_eq!(decode_service_column("Terms", DATE, "TEST").unwrap(), None);
}

#[test]
fn test_unknown_tag_is_ignored() {
    let result = decode_service_column("12-25-2024_Salt_4", DATE, "TEST").unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_date_only_column_is_ignored() {
    assert_eq!(decode_service_column("12-25-2024", DATE, "TEST").unwrap(), None);
}

#[test]
fn test_plow_without_depth_token_is_fatal() {
    let err = decode_service_column("12-25-2024_Plow", DATE, "SMITH").unwrap_err();
    match err {
        Error::DepthParse { column, customer } => {
            assert_eq!(column, "12-25-2024_Plow");
            assert_eq!(customer, "SMITH");
        }
        other => panic!("Expected DepthParse error, got {:?}", other),
    }
}

#[test]
fn test_plow_with_non_integer_depth_is_fatal() {
    let err = decode_service_column("12-25-2024_Plow_deep", DATE, "SMITH").unwrap_err();
    assert!(matches!(err, Error::DepthParse { .. }));
}

#[test]
fn test_service_descriptions() {
    let plow = ServiceKey::plow(DATE, 8, None);
    assert_eq!(plow.description(), "Snow Plowing on 12-25-2024 @ 8\" ");

    let noted = ServiceKey::plow(DATE, 4, Some("slush".to_string()));
    assert_eq!(noted.description(), "Snow Plowing on 12-25-2024 @ 4\" slush");

    let sand = ServiceKey::sand(DATE);
    assert_eq!(sand.description(), "Sanding on 12-25-2024");
}
