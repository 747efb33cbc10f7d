//! Benefit Eligibility Engine
//!
//! This crate decides, for every employee in a roster, whether they receive a
//! periodic benefit-point payout as of a reference date. Each row is
//! classified as eligible, needs-review, or excluded by a fixed, ordered rule
//! set, and the non-excluded rows are exported.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod logging;
pub mod models;
pub mod tabular;
