//! Tests for the billing engine components

pub mod depth_tier_tests;
pub mod rate_resolver_tests;
pub mod service_key_tests;

use crate::app::models::CustomerRecord;

/// Create a customer record with the given rates and service cells
pub fn create_test_customer(
    name: &str,
    plow_rate: Option<&str>,
    sand_rate: Option<&str>,
    common_rate: Option<&str>,
    services: &[(&str, &str)],
) -> CustomerRecord {
    CustomerRecord {
        name: name.to_string(),
        address: "1 Test Ln".to_string(),
        city_state_zip: "Testville, VT 05001".to_string(),
        account: "1042".to_string(),
        email: "customer@example.com".to_string(),
        terms: "Net 30".to_string(),
        plow_rate: plow_rate.map(str::to_string),
        sand_rate: sand_rate.map(str::to_string),
        common_rate: common_rate.map(str::to_string),
        services: services
            .iter()
            .map(|(column, cell)| (column.to_string(), cell.to_string()))
            .collect(),
    }
}

/// Create a customer with a plow fallback rate of 20 and no common rate
pub fn create_plow_customer(services: &[(&str, &str)]) -> CustomerRecord {
    create_test_customer("PLOW CUSTOMER", Some("20"), Some("15"), None, services)
}
