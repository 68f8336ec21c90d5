//! Output module for exporting crawl results
//!
//! This module handles:
//! - Writing the record list to CSV (append) and XLSX (overwrite)
//! - Recording and printing crawl statistics

mod csv_sink;
pub mod stats;
mod traits;
mod xlsx_sink;

pub use csv_sink::CsvSink;
pub use stats::{print_statistics, CrawlStats};
pub use traits::{ExportError, ExportResult, RecordSink};
pub use xlsx_sink::XlsxSink;

use crate::catalog::ItemRecord;
use crate::config::OutputConfig;

/// The configured sinks, CSV first
pub fn configured_sinks(config: &OutputConfig) -> Vec<Box<dyn RecordSink>> {
    let csv: Box<dyn RecordSink> = Box::new(CsvSink::new(&config.csv_path));
    let xlsx: Box<dyn RecordSink> = Box::new(XlsxSink::new(
        &config.xlsx_path,
        config.sheet_name.as_str(),
    ));
    vec![csv, xlsx]
}

/// Writes `records` to every sink
///
/// A failing sink is logged and does not stop the others. Returns the number
/// of sinks that failed.
pub fn export_records(sinks: &[Box<dyn RecordSink>], records: &[ItemRecord]) -> usize {
    let mut failures = 0;

    for sink in sinks {
        match sink.write_records(records) {
            Ok(()) => tracing::info!(
                "Wrote {} records to {} ({})",
                records.len(),
                sink.path().display(),
                sink.name()
            ),
            Err(e) => {
                tracing::error!(
                    path = %sink.path().display(),
                    "Error writing to {}: {}",
                    sink.name(),
                    e
                );
                failures += 1;
            }
        }
    }

    failures
}
