//! Export sinks for the generated dataset.
//!
//! Two sinks are provided: [`CsvSink`] writes one flat table per collection
//! and [`JsonlSink`] writes one JSON document per line. Both report row and
//! byte counts per written file.

pub mod csv;
pub mod jsonl;

pub use csv::CsvSink;
pub use jsonl::JsonlSink;

use std::fs;
use std::path::Path;

use thiserror::Error;

use comedor::Dataset;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV write error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Timestamp format error: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// A destination generated datasets can be exported to.
pub trait Sink {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Writes every collection of the dataset and reports what was written.
    fn export(&mut self, dataset: &Dataset) -> Result<SinkReport, SinkError>;
}

/// Statistics for one written collection file.
#[derive(Debug, Clone)]
pub struct CollectionReport {
    pub name: &'static str,
    pub rows: usize,
    pub bytes: u64,
}

impl CollectionReport {
    /// Builds a report from a finished file on disk.
    pub fn from_path(name: &'static str, rows: usize, path: &Path) -> Result<Self, SinkError> {
        let bytes = fs::metadata(path)?.len();
        Ok(Self { name, rows, bytes })
    }
}

/// Everything one export run wrote.
#[derive(Debug, Clone, Default)]
pub struct SinkReport {
    pub collections: Vec<CollectionReport>,
}

impl SinkReport {
    /// Total rows across all collections.
    pub fn total_rows(&self) -> usize {
        self.collections.iter().map(|c| c.rows).sum()
    }

    /// Total bytes across all collections.
    pub fn total_bytes(&self) -> u64 {
        self.collections.iter().map(|c| c.bytes).sum()
    }
}
