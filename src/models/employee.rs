//! Employee record model and column layout.
//!
//! This module defines [`EmployeeRecord`], the typed view of one roster row,
//! and [`ColumnLayout`], which maps the required column keys to positions in
//! a [`RawTable`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::columns;
use crate::error::{EngineError, EngineResult};

use super::table::{Cell, RawTable};

/// One row of the employee roster.
///
/// Text fields are `None` when the cell is empty. Date fields are `None` when
/// the cell is empty or could not be parsed as a date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Employee number (사번).
    pub employee_id: Option<String>,
    /// Display name (이름).
    pub full_name: Option<String>,
    /// Company-internal name (회사 내 이름).
    pub internal_name: Option<String>,
    /// English name (영문이름).
    pub english_name: Option<String>,
    /// Employment status (재직상태).
    pub employment_status: Option<String>,
    /// Job position (직위).
    pub position: Option<String>,
    /// Hire date (입사일).
    pub hire_date: Option<NaiveDate>,
    /// Termination date (퇴직일).
    pub termination_date: Option<NaiveDate>,
}

/// Positions of the required columns within a table header.
///
/// # Example
///
/// ```
/// use benefit_eligibility::models::{ColumnLayout, RawTable};
/// use benefit_eligibility::error::EngineError;
///
/// let table = RawTable::new(vec!["사번".to_string(), "이름".to_string()]);
/// match ColumnLayout::resolve(&table) {
///     Err(EngineError::MissingColumns { columns }) => assert_eq!(columns.len(), 6),
///     _ => panic!("expected missing columns"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    employee_id: usize,
    full_name: usize,
    internal_name: usize,
    english_name: usize,
    employment_status: usize,
    position: usize,
    hire_date: usize,
    termination_date: usize,
}

impl ColumnLayout {
    /// Resolves every required column, reporting all missing ones together.
    pub fn resolve(table: &RawTable) -> EngineResult<Self> {
        let missing: Vec<String> = columns::REQUIRED_COLUMNS
            .iter()
            .filter(|name| table.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(EngineError::MissingColumns { columns: missing });
        }

        let index = |name: &str| table.column_index(name).unwrap_or_default();

        Ok(Self {
            employee_id: index(columns::EMPLOYEE_ID),
            full_name: index(columns::FULL_NAME),
            internal_name: index(columns::INTERNAL_NAME),
            english_name: index(columns::ENGLISH_NAME),
            employment_status: index(columns::EMPLOYMENT_STATUS),
            position: index(columns::POSITION),
            hire_date: index(columns::HIRE_DATE),
            termination_date: index(columns::TERMINATION_DATE),
        })
    }

    /// Returns the index of the column used for frequency counting.
    pub fn english_name_column(&self) -> usize {
        self.english_name
    }

    /// Builds the typed record for one table row.
    ///
    /// Date columns are read as dates only; run the normalizer first so that
    /// textual dates have been coerced.
    pub fn record(&self, table: &RawTable, row: usize) -> EmployeeRecord {
        let text = |column: usize| table.cell(row, column).to_text();
        let date = |column: usize| table.cell(row, column).as_date();

        EmployeeRecord {
            employee_id: text(self.employee_id),
            full_name: text(self.full_name),
            internal_name: text(self.internal_name),
            english_name: text(self.english_name),
            employment_status: text(self.employment_status),
            position: text(self.position),
            hire_date: date(self.hire_date),
            termination_date: date(self.termination_date),
        }
    }

    /// Builds typed records for every row, in input order.
    pub fn records<'a>(&'a self, table: &'a RawTable) -> impl Iterator<Item = EmployeeRecord> + 'a {
        (0..table.len()).map(move |row| self.record(table, row))
    }
}

/// Returns the required column names as a header row.
///
/// Rows converted from an [`EmployeeRecord`] follow the same column order.
pub fn required_header() -> Vec<String> {
    columns::REQUIRED_COLUMNS
        .iter()
        .map(|name| name.to_string())
        .collect()
}

impl From<&EmployeeRecord> for Vec<Cell> {
    fn from(record: &EmployeeRecord) -> Self {
        let text = |value: &Option<String>| value.clone().map(Cell::Text).unwrap_or_default();
        let date = |value: &Option<NaiveDate>| value.map(Cell::Date).unwrap_or_default();

        vec![
            text(&record.employee_id),
            text(&record.full_name),
            text(&record.internal_name),
            text(&record.english_name),
            text(&record.employment_status),
            text(&record.position),
            date(&record.hire_date),
            date(&record.termination_date),
        ]
    }
}
