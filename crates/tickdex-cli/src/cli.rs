//! CLI argument definitions for tickdex.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// tickdex - search-suggestion index builder for stock tickers
///
/// Precomputes two JSON artifacts from a screener CSV export: a mapping from
/// every plausible search prefix to the top 5 ranked tickers, and a mapping
/// from ticker to company name.
#[derive(Debug, Parser)]
#[command(
    name = "tickdex",
    author,
    version,
    about = "Search-suggestion index builder for stock tickers"
)]
pub struct Cli {
    /// Pretty-print the JSON report written to stdout.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build both artifacts from a screener CSV export.
    ///
    /// Reads the CSV, runs the full ranking build, and writes the suggestion
    /// index and ticker directory atomically. A failed write never leaves a
    /// partially written artifact behind.
    ///
    /// # Examples
    ///
    ///   tickdex build data/nasdaq_screener.csv
    ///   tickdex build screener.csv --suggestions out/suggestions.json
    Build(BuildArgs),

    /// Parse a screener CSV and report data-quality findings.
    ///
    /// Dry run: nothing is written. Reports record counts plus warnings for
    /// empty symbols and missing or non-numeric market caps.
    Check(CheckArgs),
}

/// Arguments for the `build` command.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Path to the screener CSV export (Symbol, Name, Market Cap columns).
    pub input: PathBuf,

    /// Output path for the suggestion index artifact.
    #[arg(long, default_value = "data/autocomplete-suggestions.json")]
    pub suggestions: PathBuf,

    /// Output path for the ticker directory artifact.
    #[arg(long, default_value = "data/ticker-dictionary.json")]
    pub directory: PathBuf,
}

/// Arguments for the `check` command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the screener CSV export.
    pub input: PathBuf,
}
