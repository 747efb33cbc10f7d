//! Error types for the Benefit Eligibility Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the structural failures that abort a classification run. Per-cell
//! problems such as malformed dates never surface here; the normalizer
//! absorbs them.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Benefit Eligibility Engine.
///
/// # Example
///
/// ```
/// use benefit_eligibility::error::EngineError;
///
/// let error = EngineError::MissingColumns {
///     columns: vec!["입사일".to_string(), "직위".to_string()],
/// };
/// assert_eq!(error.to_string(), "Missing required columns: 입사일, 직위");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The input table lacks one or more columns the rules depend on.
    #[error("Missing required columns: {}", .columns.join(", "))]
    MissingColumns {
        /// Every required column that was not found in the header.
        columns: Vec<String>,
    },

    /// The input file has an extension no reader understands.
    #[error("Unsupported table format: '{extension}' (expected .csv, .xlsx or .xls)")]
    UnsupportedFormat {
        /// The offending extension, lowercased.
        extension: String,
    },

    /// The input table could not be read or parsed.
    #[error("Failed to read table '{source_name}': {message}")]
    TableRead {
        /// A file path or other description of where the table came from.
        source_name: String,
        /// A description of the read error.
        message: String,
    },

    /// The output table could not be written.
    #[error("Failed to write output table: {message}")]
    TableWrite {
        /// A description of the write error.
        message: String,
    },

    /// The tenure threshold cannot be computed for this reference date.
    #[error("Invalid reference date {date}: tenure threshold out of range")]
    InvalidReferenceDate {
        /// The reference date supplied for the run.
        date: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
