//! CSV export of classified rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::config::columns::OUTPUT_COLUMNS;
use crate::error::{EngineError, EngineResult};
use crate::models::ClassifiedRecord;

/// File name offered for the exported table.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "filtered_output.csv";

/// Writes rows as UTF-8 CSV with the output header.
///
/// Dates are written as `YYYY-MM-DD`, missing values as empty fields, and
/// the disposition as its display label.
///
/// # Example
///
/// ```
/// use benefit_eligibility::models::{ClassifiedRecord, Disposition};
/// use benefit_eligibility::tabular::write_csv;
/// use chrono::NaiveDate;
///
/// let rows = vec![ClassifiedRecord {
///     employee_id: Some("1001".to_string()),
///     full_name: Some("이지은".to_string()),
///     internal_name: Some("Alice.Lee".to_string()),
///     hire_date: NaiveDate::from_ymd_opt(2024, 9, 1),
///     disposition: Disposition::Eligible,
/// }];
///
/// let mut out = Vec::new();
/// write_csv(&rows, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "사번,이름,회사 내 이름,입사일,지급대상여부\n1001,이지은,Alice.Lee,2024-09-01,대상\n"
/// );
/// ```
pub fn write_csv<W: Write>(records: &[ClassifiedRecord], writer: W) -> EngineResult<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);

    writer.write_record(OUTPUT_COLUMNS).map_err(write_error)?;

    for record in records {
        let hire_date = record
            .hire_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        writer
            .write_record([
                record.employee_id.as_deref().unwrap_or_default(),
                record.full_name.as_deref().unwrap_or_default(),
                record.internal_name.as_deref().unwrap_or_default(),
                hire_date.as_str(),
                record.disposition.label(),
            ])
            .map_err(write_error)?;
    }

    writer.flush().map_err(write_error)?;
    Ok(())
}

/// Renders rows to an in-memory UTF-8 CSV document.
pub fn to_csv_bytes(records: &[ClassifiedRecord]) -> EngineResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    Ok(buffer)
}

/// Writes rows to a CSV file, replacing any existing file.
pub fn write_csv_file<P: AsRef<Path>>(records: &[ClassifiedRecord], path: P) -> EngineResult<()> {
    let file = File::create(path.as_ref()).map_err(write_error)?;
    write_csv(records, file)
}

fn write_error(error: impl ToString) -> EngineError {
    EngineError::TableWrite {
        message: error.to_string(),
    }
}
