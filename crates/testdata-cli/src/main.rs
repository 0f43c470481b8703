//! Synthetic test data generator CLI.

use clap::Parser;
use std::io::{self, IsTerminal};
use testdata_cli::cli::{Cli, Command};
use testdata_cli::commands::{confirmation, run_generate, run_preview};
use testdata_cli::logging::init_logging;
use testdata_cli::summary::print_preview;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config(io::stderr().is_terminal())) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match cli.resolved_command() {
        Command::Generate(args) => {
            run_generate(&args).map(|summary| println!("{}", confirmation(&summary)))
        }
        Command::Preview(args) => run_preview(&args).map(|preview| print_preview(&preview)),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
