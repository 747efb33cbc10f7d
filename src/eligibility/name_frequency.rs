//! Batch-wide name frequency table.
//!
//! Duplicate detection depends on the whole batch rather than a single row,
//! so the frequencies are computed once before any row is classified and
//! then passed to the classifier as an immutable value.

use std::collections::HashMap;

use crate::models::RawTable;

/// Number of rows sharing each name within one batch.
///
/// Missing names are not counted, so the sum of all counts equals the number
/// of rows with a non-missing value in the counted column.
///
/// # Example
///
/// ```
/// use benefit_eligibility::eligibility::NameFrequencyTable;
///
/// let table = NameFrequencyTable::from_names(["Alice.Lee", "Min.Park", "Alice.Lee"]);
/// assert_eq!(table.count("Alice.Lee"), 2);
/// assert!(table.is_duplicated("Alice.Lee"));
/// assert!(!table.is_duplicated("Min.Park"));
/// assert!(!table.is_duplicated("Nobody"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFrequencyTable {
    counts: HashMap<String, usize>,
}

impl NameFrequencyTable {
    /// Counts the non-missing values of one table column.
    pub fn build(table: &RawTable, column: usize) -> Self {
        Self::from_names(table.column(column).filter_map(|cell| cell.to_text()))
    }

    /// Counts an arbitrary sequence of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = HashMap::new();
        for name in names {
            *counts.entry(name.into()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Returns how many rows carry `name` (zero if none).
    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Returns true if more than one row carries `name`.
    pub fn is_duplicated(&self, name: &str) -> bool {
        self.count(name) > 1
    }

    /// Returns the number of counted rows.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns the number of distinct names.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns the number of names that occur more than once.
    pub fn duplicated_names(&self) -> usize {
        self.counts.values().filter(|&&count| count > 1).count()
    }
}
