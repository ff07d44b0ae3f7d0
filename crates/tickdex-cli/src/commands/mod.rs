mod build;
mod check;

use std::time::Instant;

use serde::Serialize;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use tickdex_core::SecurityRecord;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Payload and warnings a command hands back before report assembly.
pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

/// Machine-readable run report printed to stdout.
#[derive(Debug, Serialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub data: Value,
}

/// Metadata attached to every report.
#[derive(Debug, Serialize)]
pub struct ReportMeta {
    pub run_id: String,
    pub generated_at: String,
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

pub fn run(cli: &Cli) -> Result<Report, CliError> {
    let started = Instant::now();

    let command_result = match &cli.command {
        Command::Build(args) => build::run(args)?,
        Command::Check(args) => check::run(args)?,
    };

    let generated_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|error| CliError::Command(error.to_string()))?;

    Ok(Report {
        meta: ReportMeta {
            run_id: Uuid::new_v4().to_string(),
            generated_at,
            elapsed_ms: started.elapsed().as_millis() as u64,
            warnings: command_result.warnings,
        },
        data: command_result.data,
    })
}

/// Warnings shared by `build` and `check` about degenerate input rows.
fn data_quality_warnings(records: &[SecurityRecord]) -> Vec<String> {
    let empty_symbols = records
        .iter()
        .filter(|record| record.symbol.trim().is_empty())
        .count();
    let missing_caps = records
        .iter()
        .filter(|record| record.market_cap.is_none())
        .count();

    let mut warnings = Vec::new();
    if empty_symbols > 0 {
        warnings.push(format!("{empty_symbols} record(s) have an empty Symbol"));
    }
    if missing_caps > 0 {
        warnings.push(format!(
            "{missing_caps} record(s) have a missing or non-numeric Market Cap and sort as non-comparable"
        ));
    }
    warnings
}
