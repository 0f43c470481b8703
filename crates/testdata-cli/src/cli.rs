//! CLI argument definitions for the test data generator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use testdata_core::{DEFAULT_DATE, DEFAULT_OUTPUT, DEFAULT_ROWS, PREVIEW_LIMIT};
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "testdata-gen",
    version,
    about = "Generate a deterministic synthetic CSV dataset",
    long_about = "Generate a deterministic synthetic CSV dataset for downstream testing.\n\n\
                  Writes a header plus one row per index with id, name, email, amount,\n\
                  status and date columns. Output is byte-identical across runs.\n\
                  Without a subcommand, generates test_data_10k.csv with 10000 rows."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write the synthetic dataset (the default when no subcommand is given).
    Generate(GenerateArgs),

    /// Show the header and leading records of a CSV file.
    Preview(PreviewArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Number of data rows to write (0 writes only the header).
    #[arg(long = "rows", value_name = "N", default_value_t = DEFAULT_ROWS)]
    pub rows: u64,

    /// Output CSV file, created or truncated.
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Date stamped on every row.
    #[arg(long = "date", value_name = "YYYY-MM-DD", default_value_t = DEFAULT_DATE)]
    pub date: NaiveDate,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            date: DEFAULT_DATE,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PreviewArgs {
    /// CSV file to preview.
    #[arg(value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub file: PathBuf,

    /// Maximum number of records to show.
    #[arg(long = "limit", value_name = "N", default_value_t = PREVIEW_LIMIT)]
    pub limit: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl Cli {
    /// The subcommand to run, falling back to generating with defaults.
    pub fn resolved_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Generate(GenerateArgs::default()))
    }

    /// Logging configuration. `--log-level` beats `-v/-q`, and either one
    /// disables the `RUST_LOG` override.
    pub fn log_config(&self, stderr_is_terminal: bool) -> LogConfig {
        let explicit = self.log_level.map(LevelFilter::from);
        LogConfig {
            level_filter: explicit.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !self.verbosity.is_present(),
            with_ansi: match self.color.color {
                ColorChoice::Always => true,
                ColorChoice::Never => false,
                ColorChoice::Auto => self.log_file.is_none() && stderr_is_terminal,
            },
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
        }
    }
}
