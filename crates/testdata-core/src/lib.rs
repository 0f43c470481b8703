//! Deterministic synthetic CSV datasets for downstream testing, plus a
//! bounded preview of any CSV file.
//!
//! Every value in the generated file is derived from the 1-based row index,
//! so regenerating with the same options always yields byte-identical output.
//!
//! # Example
//!
//! ```no_run
//! use testdata_core::{GeneratorOptions, generate_dataset};
//!
//! let summary = generate_dataset(&GeneratorOptions::default()).unwrap();
//! println!("{summary}");
//! ```
//!
//! # Output format
//!
//! - Header: `id,name,email,amount,status,date`
//! - Comma delimiter, CRLF record terminator
//! - Fields are quoted only when they contain a comma, a quote or a line break
//!
//! [`preview_dataset`] reads back at most [`PREVIEW_LIMIT`] records (or a
//! caller-chosen limit) without parsing the rest of the file.

mod error;
pub mod options;
pub mod preview;
pub mod row;
pub mod writer;

pub use error::{DatasetError, Result};
pub use options::{DEFAULT_DATE, DEFAULT_OUTPUT, DEFAULT_ROWS, GeneratorOptions};
pub use preview::{PREVIEW_LIMIT, Preview, preview_dataset};
pub use row::{COLUMNS, Row, RowGenerator, Status};
pub use writer::{DatasetSummary, DatasetWriter, generate_dataset, write_dataset};
