//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading service
//! settings from a YAML file.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServiceConfig;

/// Loads and provides access to service configuration.
///
/// The file is a flat YAML mapping; every key is optional:
/// ```text
/// bind_address: "0.0.0.0:8080"
/// default_reference_date: "2025-04-03"
/// ```
///
/// # Example
///
/// ```no_run
/// use benefit_eligibility::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?;
/// if let Some(date) = loader.default_reference_date() {
///     println!("Default reference date: {}", date);
/// }
/// # Ok::<(), benefit_eligibility::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML or unknown keys
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    ///
    /// An empty document yields the default configuration.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str::<ServiceConfig>(content).map_err(|e| {
            EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the configured fallback reference date, if any.
    pub fn default_reference_date(&self) -> Option<NaiveDate> {
        self.config.default_reference_date
    }

    /// Picks the explicit reference date, falling back to the configured one.
    pub fn resolve_reference_date(&self, explicit: Option<NaiveDate>) -> Option<NaiveDate> {
        explicit.or(self.config.default_reference_date)
    }
}
