//! Configuration for the Benefit Eligibility Engine.
//!
//! Two kinds of configuration live here: the fixed eligibility rules and
//! column keys, which are compile-time constants, and the service settings,
//! which are loaded from an optional YAML file.
//!
//! # Example
//!
//! ```no_run
//! use benefit_eligibility::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Binding to {}", loader.config().bind_address);
//! ```

pub mod columns;
mod loader;
mod rules;
mod types;

pub use loader::ConfigLoader;
pub use rules::EligibilityRules;
pub use types::{DEFAULT_BIND_ADDRESS, ServiceConfig};
