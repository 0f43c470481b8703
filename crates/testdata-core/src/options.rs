//! Generator options and their defaults.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Number of data rows written when no count is given.
pub const DEFAULT_ROWS: u64 = 10_000;

/// Output path used when none is given, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "test_data_10k.csv";

/// Date stamped on every row when none is given.
pub const DEFAULT_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2026, 2, 10) {
    Some(date) => date,
    None => panic!("invalid default date"),
};

/// Format used to render the `date` column.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// What to generate and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Number of data rows; zero produces a header-only file.
    pub rows: u64,
    /// Output file, created or truncated.
    pub output: PathBuf,
    /// Value of the `date` column for every row.
    pub date: NaiveDate,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            date: DEFAULT_DATE,
        }
    }
}

impl GeneratorOptions {
    /// Set the number of data rows.
    #[must_use]
    pub fn with_rows(mut self, rows: u64) -> Self {
        self.rows = rows;
        self
    }

    /// Set the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = output.as_ref().to_path_buf();
        self
    }

    /// Set the date stamped on every row.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// The `date` column text, e.g. `2026-02-10`.
    pub fn date_text(&self) -> String {
        format_date(self.date)
    }
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
