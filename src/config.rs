//! Configuration management and validation.
//!
//! Provides the billing configuration assembled from the provider identity
//! file, CLI arguments, and defaults, together with the policy switch for
//! the disputed missing-plow-fallback behavior.

use crate::constants::DEFAULT_OUTPUT_DIR;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Billing-identity block rendered at the top of every invoice
///
/// Loaded whole from `provider.json` and passed through to the document
/// writers; the billing core never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
}

impl Provider {
    /// Load the provider identity from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Could not open provider file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let provider: Provider = serde_json::from_str(&contents).map_err(|e| {
            Error::configuration(format!(
                "Invalid provider file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded provider identity for '{}'", provider.name);
        Ok(provider)
    }

    /// City, state and zip on one line, as printed on invoices
    pub fn city_state_zip(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.postal_code)
    }
}

/// Behavior when a plow cell needs the customer-level fallback rate and
/// that rate is missing or unparsable
///
/// Source variants of the billing sheet disagreed on whether this should
/// kill the run or skip the single service, so both are supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackPolicy {
    /// Skip the offending service, log a warning, keep processing
    #[default]
    Skip,
    /// Abort the whole batch
    Fatal,
}

/// Global configuration for a billing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Billing identity printed on every invoice
    pub provider: Provider,

    /// Missing-plow-fallback behavior
    pub fallback_policy: FallbackPolicy,

    /// Directory for invoice documents and summary reports
    pub output_dir: PathBuf,
}

impl BillingConfig {
    /// Create a configuration with default policy and output location
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            fallback_policy: FallbackPolicy::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    /// Set the fallback policy
    pub fn with_fallback_policy(mut self, policy: FallbackPolicy) -> Self {
        self.fallback_policy = policy;
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Validate the configuration before running a batch
    pub fn validate(&self) -> Result<()> {
        if self.provider.name.trim().is_empty() {
            return Err(Error::configuration(
                "Provider name must not be empty".to_string(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::configuration(
                "Output directory must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Create the output directory if it does not exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir).map_err(|e| {
                Error::configuration(format!(
                    "Failed to create output directory '{}': {}",
                    self.output_dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider() -> Provider {
        Provider {
            name: "North Ridge Plowing".to_string(),
            address1: "12 Mill Rd".to_string(),
            city: "Barton".to_string(),
            state: "VT".to_string(),
            postal_code: "05822".to_string(),
        }
    }

    #[test]
    fn provider_deserializes_camel_case_postal_code() {
        let json = r#"{
            "name": "North Ridge Plowing",
            "address1": "12 Mill Rd",
            "city": "Barton",
            "state": "VT",
            "postalCode": "05822"
        }"#;
        let provider: Provider = serde_json::from_str(json).unwrap();
        assert_eq!(provider, test_provider());
        assert_eq!(provider.city_state_zip(), "Barton, VT 05822");
    }

    #[test]
    fn config_validates_provider_name() {
        let mut provider = test_provider();
        provider.name = "  ".to_string();
        let config = BillingConfig::new(provider);
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_builders_apply() {
        let config = BillingConfig::new(test_provider())
            .with_fallback_policy(FallbackPolicy::Fatal)
            .with_output_dir("/tmp/billing");
        assert_eq!(config.fallback_policy, FallbackPolicy::Fatal);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/billing"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_policy_is_skip() {
        assert_eq!(FallbackPolicy::default(), FallbackPolicy::Skip);
    }
}
