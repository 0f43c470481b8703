//! CSV dataset writer.
//!
//! The CSV dialect is pinned here rather than left to library defaults:
//! comma delimiter, CRLF terminators, and quoting only for fields that
//! contain a comma, a double quote or a line break (quotes are doubled).

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::{debug, info, info_span};

use crate::error::{DatasetError, Result};
use crate::options::{GeneratorOptions, format_date};
use crate::row::{COLUMNS, Row, RowGenerator};

/// Outcome of a successful [`generate_dataset`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub path: PathBuf,
    pub rows: u64,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Created {} with {} rows.", self.path.display(), self.rows)
    }
}

/// Streams the header and synthetic rows into any `Write` sink.
pub struct DatasetWriter<W: Write> {
    writer: csv::Writer<W>,
    date: String,
    rows_written: u64,
}

impl<W: Write> DatasetWriter<W> {
    /// Create a writer stamping `date` on every row.
    pub fn new(writer: W, date: NaiveDate) -> Self {
        Self {
            writer: csv_builder().from_writer(writer),
            date: format_date(date),
            rows_written: 0,
        }
    }

    /// Write the header record.
    pub fn write_header(&mut self) -> Result<()> {
        self.writer.write_record(COLUMNS)?;
        Ok(())
    }

    /// Write a single data record. Callers supplying their own rows are
    /// responsible for keeping ids contiguous.
    pub fn write_row(&mut self, row: &Row<'_>) -> Result<()> {
        self.writer.serialize(row)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Write the next `count` rows, continuing after the rows already
    /// written, and return how many were written.
    pub fn write_rows(&mut self, count: u64) -> Result<u64> {
        let date = self.date.clone();
        let start = self.rows_written + 1;
        for row in RowGenerator::starting_at(start, count, &date) {
            self.write_row(&row)?;
        }
        Ok(count)
    }

    /// Data records written so far, excluding the header.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush buffered records and hand back the sink.
    pub fn finish(self) -> Result<W> {
        self.writer.into_inner().map_err(|err| DatasetError::Flush {
            source: err.into_error(),
        })
    }
}

/// Write a header plus `rows` records to `writer` and return the sink.
pub fn write_dataset<W: Write>(writer: W, rows: u64, date: NaiveDate) -> Result<W> {
    let mut dataset = DatasetWriter::new(writer, date);
    dataset.write_header()?;
    dataset.write_rows(rows)?;
    dataset.finish()
}

/// Create (or truncate) the output file and write the full dataset.
///
/// The file handle is closed on every path. A failure part-way through
/// leaves whatever was already written on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be created, a record cannot be
/// written, or the final flush fails.
pub fn generate_dataset(options: &GeneratorOptions) -> Result<DatasetSummary> {
    let span = info_span!("generate", rows = options.rows, path = %options.output.display());
    let _guard = span.enter();

    let file = create_output(&options.output)?;
    debug!("opened output file");

    write_dataset(file, options.rows, options.date)?;

    info!(rows = options.rows, "dataset written");
    Ok(DatasetSummary {
        path: options.output.clone(),
        rows: options.rows,
    })
}

fn create_output(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| DatasetError::Create {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(b',')
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .quote(b'"')
        .double_quote(true)
        .has_headers(false);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 10).expect("date")
    }

    fn render(record: &[&str]) -> String {
        let mut writer = csv_builder().from_writer(Vec::new());
        writer.write_record(record).expect("write record");
        String::from_utf8(writer.into_inner().expect("flush")).expect("utf8")
    }

    #[test]
    fn plain_fields_are_not_quoted() {
        assert_eq!(
            render(&["1", "User_1", "user1@example.com"]),
            "1,User_1,user1@example.com\r\n"
        );
    }

    #[test]
    fn fields_with_delimiter_are_quoted() {
        assert_eq!(render(&["a,b", "c"]), "\"a,b\",c\r\n");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(render(&["say \"hi\""]), "\"say \"\"hi\"\"\"\r\n");
    }

    #[test]
    fn fields_with_line_breaks_are_quoted() {
        assert_eq!(render(&["a\nb", "c\r\nd"]), "\"a\nb\",\"c\r\nd\"\r\n");
    }

    #[test]
    fn writer_counts_rows() {
        let mut writer = DatasetWriter::new(Vec::new(), date());
        writer.write_header().expect("header");
        assert_eq!(writer.write_rows(4).expect("rows"), 4);
        assert_eq!(writer.rows_written(), 4);
        let bytes = writer.finish().expect("finish");
        assert_eq!(bytes.iter().filter(|&&b| b == b'\n').count(), 5);
    }

    fn ids(bytes: &[u8]) -> Vec<u64> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes);
        reader
            .records()
            .map(|record| record.expect("record")[0].parse().expect("id"))
            .collect()
    }

    #[test]
    fn repeated_write_rows_continue_the_sequence() {
        let mut writer = DatasetWriter::new(Vec::new(), date());
        writer.write_rows(2).expect("first batch");
        writer.write_rows(2).expect("second batch");
        assert_eq!(writer.rows_written(), 4);
        let bytes = writer.finish().expect("finish");
        assert_eq!(ids(&bytes), vec![1, 2, 3, 4]);
    }

    #[test]
    fn write_rows_after_write_row_keeps_ids_unique() {
        let mut writer = DatasetWriter::new(Vec::new(), date());
        writer.write_row(&Row::new(1, "2026-02-10")).expect("row");
        writer.write_rows(2).expect("rows");
        assert_eq!(writer.rows_written(), 3);
        let bytes = writer.finish().expect("finish");
        assert_eq!(ids(&bytes), vec![1, 2, 3]);
    }

    #[test]
    fn single_row_matches_expected_record() {
        let mut writer = DatasetWriter::new(Vec::new(), date());
        writer.write_row(&Row::new(2, "2026-02-10")).expect("row");
        let bytes = writer.finish().expect("finish");
        assert_eq!(bytes, b"2,User_2,user2@example.com,102,active,2026-02-10\r\n");
    }

    #[test]
    fn summary_message_names_file_and_rows() {
        let summary = DatasetSummary {
            path: PathBuf::from("test_data_10k.csv"),
            rows: 10_000,
        };
        assert_eq!(
            summary.to_string(),
            "Created test_data_10k.csv with 10000 rows."
        );
    }
}
