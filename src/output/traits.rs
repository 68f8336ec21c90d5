//! Export sink trait and error type
//!
//! Sinks consume a finished record list; they never see a partial crawl.

use crate::catalog::ItemRecord;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing exports
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Too many records for one worksheet: {0}")]
    TooManyRows(usize),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// A tabular destination for crawl records
///
/// Implementations write `HEADER` followed by one row per record, fields in
/// `ItemRecord::to_row` order.
pub trait RecordSink {
    /// Short name used in log lines, e.g. "CSV"
    fn name(&self) -> &'static str;

    /// File the sink writes to
    fn path(&self) -> &Path;

    /// Writes the header row and every record
    fn write_records(&self, records: &[ItemRecord]) -> ExportResult<()>;
}
