//! Configuration types for the eligibility service.
//!
//! This module contains the strongly-typed settings deserialized from the
//! service YAML file. Business rules are not configurable and live in
//! [`super::EligibilityRules`].

use chrono::NaiveDate;
use serde::Deserialize;

/// Address the HTTP API binds to when the file does not say otherwise.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

/// Settings for the HTTP service and the command-line runner.
///
/// # Example
///
/// ```
/// use benefit_eligibility::config::ServiceConfig;
///
/// let config = ServiceConfig::default();
/// assert_eq!(config.bind_address, "127.0.0.1:8080");
/// assert!(config.default_reference_date.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Socket address for the HTTP API (e.g. "0.0.0.0:8080").
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Reference date used when a request or command omits one.
    #[serde(default)]
    pub default_reference_date: Option<NaiveDate>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            default_reference_date: None,
        }
    }
}
