mod cli;
mod commands;
mod error;
mod output;
mod storage;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let report = commands::run(&cli)?;
    output::render(&report, cli.pretty)
}
