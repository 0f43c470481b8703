//! Read back the leading records of a CSV file.
//!
//! Parsing stops as soon as `limit` records have been collected, so
//! previewing a large file costs only the rows shown.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{DatasetError, Result};

/// Records shown when no limit is given.
pub const PREVIEW_LIMIT: usize = 100;

/// Header and leading records of a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub path: PathBuf,
    /// File size on disk, in bytes.
    pub size_bytes: u64,
    pub headers: StringRecord,
    pub records: Vec<StringRecord>,
    /// True when the file holds more records than were collected.
    pub truncated: bool,
}

impl Preview {
    /// Value of `column` in the record at `row`, if both exist.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.headers.iter().position(|name| name == column)?;
        self.records.get(row)?.get(index)
    }

    /// File size in kilobytes, formatted with two decimals.
    pub fn size_kb(&self) -> String {
        format!("{:.2} KB", self.size_bytes as f64 / 1024.0)
    }
}

/// Read the header and up to `limit` records from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a record is malformed.
pub fn preview_dataset(path: &Path, limit: usize) -> Result<Preview> {
    let read_error = |source: csv::Error| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(read_error)?;
    let headers = reader.headers().map_err(read_error)?.clone();
    let size_bytes = reader
        .get_ref()
        .metadata()
        .map(|metadata| metadata.len())
        .map_err(|err| read_error(err.into()))?;

    let mut records = Vec::with_capacity(limit.min(PREVIEW_LIMIT));
    let mut truncated = false;
    for result in reader.records() {
        let record = result.map_err(read_error)?;
        if records.len() >= limit {
            truncated = true;
            break;
        }
        records.push(record);
    }
    debug!(records = records.len(), truncated, "preview collected");

    Ok(Preview {
        path: path.to_path_buf(),
        size_bytes,
        headers,
        records,
        truncated,
    })
}
