//! Date column normalization.
//!
//! Roster exports carry dates in several textual shapes, and sometimes
//! values that are not dates at all. The normalizer coerces the date columns
//! to [`Cell::Date`] and downgrades anything unparsable to [`Cell::Missing`]
//! so that one bad cell never aborts a run.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::models::{Cell, RawTable};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parses a textual date, discarding any time of day.
///
/// Returns `None` for anything that is not a recognised date.
///
/// # Examples
///
/// ```
/// use benefit_eligibility::eligibility::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 9, 1);
/// assert_eq!(parse_date("2024-09-01"), expected);
/// assert_eq!(parse_date("2024/09/01"), expected);
/// assert_eq!(parse_date("2024-09-01 13:45:00"), expected);
/// assert_eq!(parse_date("not a date"), None);
/// ```
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| parse_compact_date(value))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|datetime| datetime.date())
        })
}

/// Parses `YYYYMMDD`; chrono's `%Y` would swallow all eight digits.
fn parse_compact_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = value[0..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Coerces one cell to a date cell, or to missing if it is not a date.
pub fn normalize_date_cell(cell: &Cell) -> Cell {
    match cell {
        Cell::Date(date) => Cell::Date(*date),
        Cell::Text(value) => parse_date(value).map(Cell::Date).unwrap_or_default(),
        Cell::Missing => Cell::Missing,
    }
}

/// Coerces the named columns of `table` to strict dates.
///
/// Columns absent from the table are skipped. Normalizing an already
/// normalized table returns it unchanged.
///
/// # Example
///
/// ```
/// use benefit_eligibility::eligibility::normalize_date_columns;
/// use benefit_eligibility::models::{Cell, RawTable};
/// use chrono::NaiveDate;
///
/// let mut table = RawTable::new(vec!["입사일".to_string()]);
/// table.push_row(vec![Cell::text("2024-09-01")]);
/// table.push_row(vec![Cell::text("unknown")]);
///
/// let table = normalize_date_columns(table, &["입사일"]);
/// assert_eq!(table.cell(0, 0), &Cell::Date(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()));
/// assert!(table.cell(1, 0).is_missing());
/// ```
pub fn normalize_date_columns(mut table: RawTable, columns: &[&str]) -> RawTable {
    for name in columns {
        let Some(column) = table.column_index(name) else {
            continue;
        };

        let mut downgraded = 0usize;
        table.map_column(column, |cell| {
            let normalized = normalize_date_cell(cell);
            if !cell.is_missing() && normalized.is_missing() {
                downgraded += 1;
            }
            normalized
        });

        if downgraded > 0 {
            debug!(
                column = %name,
                downgraded,
                "Unparsable dates treated as missing"
            );
        }
    }

    table
}
