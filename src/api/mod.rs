//! HTTP API module for the Benefit Eligibility Engine.
//!
//! This module provides the REST endpoints that accept a roster and a
//! reference date and return the retained rows as JSON or CSV.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ClassificationRequest, CsvClassificationQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
