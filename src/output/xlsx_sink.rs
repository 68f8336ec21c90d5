//! XLSX export
//!
//! Builds a fresh single-sheet workbook and overwrites the target file.

use crate::catalog::{ItemRecord, HEADER};
use crate::output::traits::{ExportError, ExportResult, RecordSink};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// Writes records to a new workbook
#[derive(Debug, Clone)]
pub struct XlsxSink {
    path: PathBuf,
    sheet_name: String,
}

impl XlsxSink {
    pub fn new(path: impl Into<PathBuf>, sheet_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheet_name: sheet_name.into(),
        }
    }
}

impl RecordSink for XlsxSink {
    fn name(&self) -> &'static str {
        "XLSX"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write_records(&self, records: &[ItemRecord]) -> ExportResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(self.sheet_name.as_str())?;

        for (col, title) in (0u16..).zip(HEADER) {
            worksheet.write_string(0, col, title)?;
        }

        for (index, record) in records.iter().enumerate() {
            let row = u32::try_from(index + 1)
                .map_err(|_| ExportError::TooManyRows(records.len()))?;
            for (col, value) in (0u16..).zip(record.to_row()) {
                worksheet.write_string(row, col, value)?;
            }
        }

        workbook.save(&self.path)?;
        Ok(())
    }
}
