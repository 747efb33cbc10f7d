//! Application state for the Benefit Eligibility Engine API.
//!
//! Handlers share only the immutable service configuration. Every request
//! builds its own table and frequency counts.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::ConfigLoader;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Resolves the reference date for one request.
    pub fn reference_date(&self, explicit: Option<NaiveDate>) -> Option<NaiveDate> {
        self.config.resolve_reference_date(explicit)
    }
}
