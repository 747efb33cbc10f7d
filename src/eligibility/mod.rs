//! Eligibility classification for the Benefit Eligibility Engine.
//!
//! This module contains the classification pipeline: date normalization,
//! the batch-wide name frequency table, per-row rule evaluation, and the
//! output projection. [`classify_batch`] runs all four stages in order.

mod classifier;
mod name_frequency;
mod normalizer;
mod projection;

pub use classifier::{ClassificationContext, classify_record};
pub use name_frequency::NameFrequencyTable;
pub use normalizer::{normalize_date_cell, normalize_date_columns, parse_date};
pub use projection::project_retained;

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::columns;
use crate::error::EngineResult;
use crate::models::{ClassificationReport, ColumnLayout, DispositionSummary, RawTable};

/// Version string stamped on every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs one classification pass over a roster.
///
/// The stages run in order: resolve the required columns, coerce the date
/// columns, count names across the batch, classify every row, and keep the
/// non-excluded rows in input order.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MissingColumns`] naming every
/// required column absent from the header, and
/// [`crate::error::EngineError::InvalidReferenceDate`] if the tenure
/// window cannot be computed. Malformed date cells are not errors.
///
/// # Example
///
/// ```
/// use benefit_eligibility::eligibility::classify_batch;
/// use benefit_eligibility::models::{required_header, RawTable};
/// use chrono::NaiveDate;
///
/// let table = RawTable::new(required_header());
/// let report = classify_batch(table, NaiveDate::from_ymd_opt(2025, 4, 3).unwrap()).unwrap();
/// assert!(report.records.is_empty());
/// ```
pub fn classify_batch(table: RawTable, reference_date: NaiveDate) -> EngineResult<ClassificationReport> {
    let start_time = Instant::now();

    let layout = ColumnLayout::resolve(&table)?;
    let context = ClassificationContext::new(reference_date)?;

    let table = normalize_date_columns(table, &columns::DATE_COLUMNS);
    let frequencies = NameFrequencyTable::build(&table, layout.english_name_column());

    let mut summary = DispositionSummary::default();
    let classified: Vec<_> = layout
        .records(&table)
        .enumerate()
        .map(|(row, record)| {
            let disposition = classify_record(&record, &context, &frequencies);
            debug!(
                row,
                employee_id = record.employee_id.as_deref().unwrap_or_default(),
                disposition = %disposition,
                "Row classified"
            );
            summary.record(disposition);
            (record, disposition)
        })
        .collect();

    let records = project_retained(classified);

    info!(
        reference_date = %reference_date,
        tenure_threshold = %context.tenure_threshold(),
        rows = summary.total,
        eligible = summary.eligible,
        needs_review = summary.needs_review,
        excluded = summary.excluded,
        duplicated_names = frequencies.duplicated_names(),
        duration_us = start_time.elapsed().as_micros(),
        "Classification completed"
    );

    Ok(ClassificationReport {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        reference_date,
        tenure_threshold: context.tenure_threshold(),
        records,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{Cell, Disposition, required_header};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Builds a row in `required_header()` order from text values.
    fn row(
        id: &str,
        internal_name: &str,
        english_name: &str,
        status: &str,
        position: &str,
        hire: &str,
        termination: &str,
    ) -> Vec<Cell> {
        vec![
            Cell::text(id),
            Cell::text(format!("직원{id}")),
            Cell::text(internal_name),
            Cell::text(english_name),
            Cell::text(status),
            Cell::text(position),
            Cell::text(hire),
            Cell::text(termination),
        ]
    }

    fn table(rows: Vec<Vec<Cell>>) -> RawTable {
        let mut table = RawTable::new(required_header());
        for cells in rows {
            table.push_row(cells);
        }
        table
    }

    #[test]
    fn test_empty_table_yields_empty_report() {
        let report = classify_batch(table(vec![]), date(2025, 4, 3)).unwrap();

        assert!(report.records.is_empty());
        assert_eq!(report.summary, DispositionSummary::default());
        assert_eq!(report.tenure_threshold, date(2025, 1, 3));
        assert_eq!(report.engine_version, ENGINE_VERSION);
    }

    #[test]
    fn test_missing_columns_abort_the_run() {
        let mut headers = required_header();
        headers.retain(|h| h != "영문이름" && h != "퇴직일");
        let result = classify_batch(RawTable::new(headers), date(2025, 4, 3));

        match result {
            Err(EngineError::MissingColumns { columns }) => {
                assert_eq!(columns, vec!["영문이름", "퇴직일"]);
            }
            _ => panic!("Expected MissingColumns error"),
        }
    }

    #[test]
    fn test_textual_dates_are_normalized_before_classification() {
        crate::logging::init_test();

        let report = classify_batch(
            table(vec![
                row("1", "Alice.Lee", "Alice.Lee", "재직", "Engineer", "2024/09/01", ""),
                row("2", "Min.Park", "Min.Park", "재직", "Engineer", "2020-01-01", "2025.03.01"),
            ]),
            date(2025, 4, 3),
        )
        .unwrap();

        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[0].hire_date, Some(date(2024, 9, 1)));
        assert_eq!(report.records[0].disposition, Disposition::Eligible);
        assert_eq!(report.records[1].disposition, Disposition::NeedsReview);
    }

    #[test]
    fn test_malformed_hire_date_is_excluded_not_fatal() {
        let report = classify_batch(
            table(vec![row("1", "Alice.Lee", "Alice.Lee", "재직", "Engineer", "미정", "")]),
            date(2025, 4, 3),
        )
        .unwrap();

        assert!(report.records.is_empty());
        assert_eq!(report.summary.excluded, 1);
    }

    #[test]
    fn test_malformed_termination_date_falls_through_to_other_rules() {
        let report = classify_batch(
            table(vec![row("1", "Alice.Lee", "Alice.Lee", "재직", "Engineer", "2020-01-01", "??")]),
            date(2025, 4, 3),
        )
        .unwrap();

        assert_eq!(report.records[0].disposition, Disposition::Eligible);
    }

    #[test]
    fn test_duplicates_counted_over_english_name_column() {
        let report = classify_batch(
            table(vec![
                row("1", "Alice.Lee", "Alice.Lee", "재직", "Engineer", "2020-01-01", ""),
                row("2", "Alice.Lee", "Alice.Lee", "재직", "Engineer", "2021-01-01", ""),
                row("3", "Min.Park", "Min Park", "재직", "Engineer", "2020-01-01", ""),
                row("4", "Min.Park", "Min Park", "재직", "Engineer", "2020-01-01", ""),
            ]),
            date(2025, 4, 3),
        )
        .unwrap();

        // Both Alice rows are excluded; the Min rows never match their own english name.
        let ids: Vec<_> = report
            .records
            .iter()
            .map(|r| r.employee_id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, vec!["3", "4"]);
        assert_eq!(report.summary.excluded, 2);
    }

    #[test]
    fn test_summary_covers_every_row() {
        let report = classify_batch(
            table(vec![
                row("1", "Alice.Lee", "Alice.Lee", "재직", "Engineer", "2020-01-01", ""),
                row("2", "Min.Park", "Min.Park", "퇴직", "Engineer", "2020-01-01", "2024-12-31"),
                row("3", "Jin.Choi", "Jin.Choi", "재직", "Engineer", "2020-01-01", "2025-01-31"),
            ]),
            date(2025, 4, 3),
        )
        .unwrap();

        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.eligible, 1);
        assert_eq!(report.summary.needs_review, 1);
        assert_eq!(report.summary.excluded, 1);
        assert_eq!(report.summary.retained(), report.records.len());
    }
}
