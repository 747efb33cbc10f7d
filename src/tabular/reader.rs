//! Table readers for CSV and Excel rosters.
//!
//! Both readers take the first row as the header, trim text values, turn
//! empty cells into [`Cell::Missing`], and skip rows that are entirely blank.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use csv::ReaderBuilder;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{Cell, RawTable};

/// Supported roster file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// An Excel workbook; only the first worksheet is read.
    Excel,
}

impl TableFormat {
    /// Picks the format from a file extension (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use benefit_eligibility::tabular::TableFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(TableFormat::from_path(Path::new("roster.XLSX")).unwrap(), TableFormat::Excel);
    /// assert!(TableFormat::from_path(Path::new("roster.txt")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> EngineResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match extension.as_str() {
            "csv" => Ok(TableFormat::Csv),
            "xlsx" | "xls" => Ok(TableFormat::Excel),
            _ => Err(EngineError::UnsupportedFormat { extension }),
        }
    }
}

/// Reads a roster file, choosing the reader from its extension.
pub fn read_table<P: AsRef<Path>>(path: P) -> EngineResult<RawTable> {
    let path = path.as_ref();
    let format = TableFormat::from_path(path)?;

    let table = match format {
        TableFormat::Csv => {
            let file = File::open(path).map_err(|e| table_read_error(path, e))?;
            read_csv(file, &path.display().to_string())?
        }
        TableFormat::Excel => read_excel(path)?,
    };

    info!(
        path = %path.display(),
        format = ?format,
        rows = table.len(),
        columns = table.headers().len(),
        "Table loaded"
    );

    Ok(table)
}

/// Reads CSV text with a header row from any reader.
///
/// `source_name` only labels errors. A leading UTF-8 byte order mark is
/// ignored.
///
/// # Example
///
/// ```
/// use benefit_eligibility::tabular::read_csv;
///
/// let csv = "사번,이름\n1001, 이지은 \n,\n";
/// let table = read_csv(csv.as_bytes(), "inline").unwrap();
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.cell(0, 1).to_text().as_deref(), Some("이지은"));
/// ```
pub fn read_csv<R: Read>(reader: R, source_name: &str) -> EngineResult<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| table_read_error(source_name, e))?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let mut table = RawTable::new(headers);
    for result in reader.records() {
        let record = result.map_err(|e| table_read_error(source_name, e))?;
        // Surrounding whitespace is dropped so " Intern" matches the exact rule markers.
        let cells: Vec<Cell> = record.iter().map(|value| Cell::text(value.trim())).collect();

        if cells.iter().all(Cell::is_missing) {
            continue;
        }
        table.push_row(cells);
    }

    Ok(table)
}

/// Reads the first worksheet of an Excel workbook.
///
/// Date-formatted cells become [`Cell::Date`]; other values are rendered as
/// text and left for the normalizer to interpret.
pub fn read_excel<P: AsRef<Path>>(path: P) -> EngineResult<RawTable> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|e| table_read_error(path, e))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| table_read_error(path, "workbook has no worksheets"))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| table_read_error(path, e))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(RawTable::default());
    };

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let mut table = RawTable::new(headers);
    for data_row in rows {
        let cells: Vec<Cell> = data_row.iter().map(excel_cell).collect();

        if cells.iter().all(Cell::is_missing) {
            continue;
        }
        table.push_row(cells);
    }

    Ok(table)
}

fn excel_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Missing,
        Data::DateTime(_) | Data::DateTimeIso(_) => {
            cell.as_date().map(Cell::Date).unwrap_or_default()
        }
        // Trimmed for the same exact-match rules as CSV text.
        Data::String(value) => Cell::text(value.trim()),
        other => Cell::text(other.to_string().trim()),
    }
}

fn table_read_error(source: impl AsRef<Path>, error: impl ToString) -> EngineError {
    EngineError::TableRead {
        source_name: source.as_ref().display().to_string(),
        message: error.to_string(),
    }
}
