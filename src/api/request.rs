//! Request types for the Benefit Eligibility Engine API.
//!
//! This module defines the JSON body of `POST /classify` and the query
//! string of `POST /classify/csv`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{Cell, RawTable, required_header};

/// Request body for the `/classify` endpoint.
///
/// Each row maps a column name to a string, number, or null. Columns are
/// matched by exact name, so row objects may list them in any order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRequest {
    /// The reference date; the configured default applies when omitted.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// The roster rows.
    pub rows: Vec<Map<String, Value>>,
}

impl ClassificationRequest {
    /// Converts the rows to a table.
    ///
    /// The header is every key in order of first appearance; keys absent
    /// from a row become missing cells. With no rows at all the header is
    /// the required columns, so an empty roster classifies to an empty report.
    ///
    /// # Example
    ///
    /// ```
    /// use benefit_eligibility::api::ClassificationRequest;
    ///
    /// let request: ClassificationRequest = serde_json::from_str(
    ///     r#"{"rows": [{"사번": 1001, "입사일": "2024-09-01"}, {"사번": "1002", "입사일": null}]}"#,
    /// ).unwrap();
    ///
    /// let table = request.into_table();
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.cell(0, table.column_index("사번").unwrap()).to_text().as_deref(), Some("1001"));
    /// assert!(table.cell(1, table.column_index("입사일").unwrap()).is_missing());
    /// ```
    pub fn into_table(self) -> RawTable {
        if self.rows.is_empty() {
            return RawTable::new(required_header());
        }

        let mut headers: Vec<String> = Vec::new();
        for row in &self.rows {
            for key in row.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }

        let mut table = RawTable::new(headers.clone());
        for mut row in self.rows {
            let cells = headers
                .iter()
                .map(|header| row.remove(header).map(json_cell).unwrap_or_default())
                .collect();
            table.push_row(cells);
        }

        table
    }
}

fn json_cell(value: Value) -> Cell {
    match value {
        Value::Null => Cell::Missing,
        // Trimmed like file input; rule markers compare exactly afterwards.
        Value::String(text) => Cell::text(text.trim()),
        Value::Number(number) => Cell::text(number.to_string()),
        Value::Bool(flag) => Cell::text(flag.to_string()),
        other => Cell::text(other.to_string()),
    }
}

/// Query string for the `/classify/csv` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CsvClassificationQuery {
    /// The reference date; the configured default applies when omitted.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}
