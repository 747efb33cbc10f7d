//! Core data models for the Benefit Eligibility Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod classification_result;
mod disposition;
mod employee;
mod table;

pub use classification_result::{ClassificationReport, ClassifiedRecord, DispositionSummary};
pub use disposition::Disposition;
pub use employee::{ColumnLayout, EmployeeRecord, required_header};
pub use table::{Cell, RawTable};
