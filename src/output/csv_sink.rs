//! CSV export
//!
//! The file is opened in append mode, so repeated runs accumulate; each run
//! writes its own header row first.

use crate::catalog::{ItemRecord, HEADER};
use crate::output::traits::{ExportResult, RecordSink};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Appends records to a CSV file
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSink for CsvSink {
    fn name(&self) -> &'static str {
        "CSV"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write_records(&self, records: &[ItemRecord]) -> ExportResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer.write_record(HEADER)?;
        for record in records {
            writer.write_record(record.to_row())?;
        }
        writer.flush()?;

        Ok(())
    }
}
