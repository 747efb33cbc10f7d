//! Reading rosters and writing results.
//!
//! Readers turn CSV and Excel files into a [`crate::models::RawTable`];
//! the writer exports classified rows as UTF-8 CSV.

mod reader;
mod writer;

pub use reader::{TableFormat, read_csv, read_excel, read_table};
pub use writer::{DEFAULT_EXPORT_FILE_NAME, to_csv_bytes, write_csv, write_csv_file};
