use anyhow::{Context, Result};
use tracing::debug;

use testdata_core::{DatasetSummary, GeneratorOptions, Preview, generate_dataset, preview_dataset};

use crate::cli::{GenerateArgs, PreviewArgs};

/// Generate the dataset described by `args`.
pub fn run_generate(args: &GenerateArgs) -> Result<DatasetSummary> {
    let options = generator_options(args);
    debug!(?options, "resolved generator options");
    generate_dataset(&options)
        .with_context(|| format!("generate dataset {}", options.output.display()))
}

/// Read back the leading records of the file named in `args`.
pub fn run_preview(args: &PreviewArgs) -> Result<Preview> {
    preview_dataset(&args.file, args.limit)
        .with_context(|| format!("preview {}", args.file.display()))
}

/// Translate CLI arguments into generator options.
pub fn generator_options(args: &GenerateArgs) -> GeneratorOptions {
    GeneratorOptions::default()
        .with_rows(args.rows)
        .with_output(&args.output)
        .with_date(args.date)
}

/// Confirmation line printed to stdout after a successful run.
pub fn confirmation(summary: &DatasetSummary) -> String {
    format!("✅ {summary}")
}
