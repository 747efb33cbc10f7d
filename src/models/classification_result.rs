//! Classification result models for the Benefit Eligibility Engine.
//!
//! This module contains the [`ClassificationReport`] type and its associated
//! structures that capture the output of one classification run: the
//! retained rows projected to the export columns plus a disposition summary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Disposition, EmployeeRecord};

/// One row of the output table.
///
/// # Example
///
/// ```
/// use benefit_eligibility::models::{ClassifiedRecord, Disposition};
/// use chrono::NaiveDate;
///
/// let row = ClassifiedRecord {
///     employee_id: Some("1001".to_string()),
///     full_name: Some("이지은".to_string()),
///     internal_name: Some("Alice.Lee".to_string()),
///     hire_date: NaiveDate::from_ymd_opt(2024, 9, 1),
///     disposition: Disposition::Eligible,
/// };
/// assert_eq!(row.disposition.label(), "대상");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    /// Employee number (사번).
    pub employee_id: Option<String>,
    /// Display name (이름).
    pub full_name: Option<String>,
    /// Company-internal name (회사 내 이름).
    pub internal_name: Option<String>,
    /// Hire date (입사일).
    pub hire_date: Option<NaiveDate>,
    /// The assigned disposition (지급대상여부).
    pub disposition: Disposition,
}

impl ClassifiedRecord {
    /// Projects a record onto the output columns.
    pub fn project(record: EmployeeRecord, disposition: Disposition) -> Self {
        Self {
            employee_id: record.employee_id,
            full_name: record.full_name,
            internal_name: record.internal_name,
            hire_date: record.hire_date,
            disposition,
        }
    }
}

/// Per-disposition counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispositionSummary {
    /// Rows classified as eligible.
    pub eligible: usize,
    /// Rows classified as needing review.
    pub needs_review: usize,
    /// Rows classified as excluded (not present in the output).
    pub excluded: usize,
    /// All rows in the input table.
    pub total: usize,
}

impl DispositionSummary {
    /// Counts one more row with the given disposition.
    pub fn record(&mut self, disposition: Disposition) {
        match disposition {
            Disposition::Eligible => self.eligible += 1,
            Disposition::NeedsReview => self.needs_review += 1,
            Disposition::Excluded => self.excluded += 1,
        }
        self.total += 1;
    }

    /// Returns the number of rows present in the output.
    pub fn retained(&self) -> usize {
        self.eligible + self.needs_review
    }
}

/// The complete result of one classification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run completed.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The reference date the rules were evaluated against.
    pub reference_date: NaiveDate,
    /// Hires on or after this date were excluded as too recent.
    pub tenure_threshold: NaiveDate,
    /// Retained rows in input order.
    pub records: Vec<ClassifiedRecord>,
    /// Disposition counts over the whole input.
    pub summary: DispositionSummary,
}
