//! Raw tabular input.
//!
//! This module defines [`Cell`] and [`RawTable`], the untyped table that
//! readers produce and the normalizer refines before classification.

use std::fmt;

use chrono::NaiveDate;

/// A single value in a [`RawTable`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    /// No value (empty cell, null, or an unparsable date).
    #[default]
    Missing,
    /// Any non-empty textual value.
    Text(String),
    /// A calendar date without time of day.
    Date(NaiveDate),
}

static MISSING: Cell = Cell::Missing;

impl Cell {
    /// Builds a text cell, treating blank input as missing.
    ///
    /// # Example
    ///
    /// ```
    /// use benefit_eligibility::models::Cell;
    ///
    /// assert_eq!(Cell::text("  "), Cell::Missing);
    /// assert_eq!(Cell::text("Alice.Lee"), Cell::Text("Alice.Lee".to_string()));
    /// ```
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Cell::Missing
        } else {
            Cell::Text(value)
        }
    }

    /// Returns true if the cell holds no value.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Returns the date if the cell is date-typed.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// Renders the cell as text; dates use `YYYY-MM-DD`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Missing => None,
            Cell::Text(value) => Some(value.clone()),
            Cell::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Text(value) => f.write_str(value),
            Cell::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// An ordered header plus rows of untyped cells.
///
/// Every row has exactly as many cells as there are headers: short rows are
/// padded with [`Cell::Missing`] and cells beyond the header are dropped.
///
/// # Example
///
/// ```
/// use benefit_eligibility::models::{Cell, RawTable};
///
/// let mut table = RawTable::new(vec!["사번".to_string(), "이름".to_string()]);
/// table.push_row(vec![Cell::text("1001")]);
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.column_index("이름"), Some(1));
/// assert!(table.cell(0, 1).is_missing());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Creates an empty table with the given header.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut cells: Vec<Cell>) {
        cells.resize(self.headers.len(), Cell::Missing);
        self.rows.push(cells);
    }

    /// Returns the header names in column order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns all rows in input order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finds the first column whose header equals `name` exactly.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Returns the cell at (row, column), or `Missing` when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&MISSING)
    }

    /// Iterates over the cells of one column.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows
            .iter()
            .map(move |cells| cells.get(column).unwrap_or(&MISSING))
    }

    /// Replaces every cell of one column with `f(cell)`.
    pub fn map_column<F>(&mut self, column: usize, mut f: F)
    where
        F: FnMut(&Cell) -> Cell,
    {
        for cells in &mut self.rows {
            if let Some(cell) = cells.get_mut(column) {
                *cell = f(cell);
            }
        }
    }
}
