use serde_json::json;

use tickdex_core::{build_suggestion_index, build_ticker_directory, read_records_from_path};

use crate::cli::BuildArgs;
use crate::error::CliError;
use crate::storage;

use super::CommandResult;

pub fn run(args: &BuildArgs) -> Result<CommandResult, CliError> {
    let records = read_records_from_path(&args.input)?;
    let record_count = records.len();
    let warnings = super::data_quality_warnings(&records);

    let directory = build_ticker_directory(&records);
    let index = build_suggestion_index(records);

    let suggestion_key_count = index.len();
    let directory_entry_count = directory.len();

    storage::write_json_atomic(&args.suggestions, &index.to_json()?)?;
    storage::write_json_atomic(&args.directory, &serde_json::to_string(&directory)?)?;

    log::info!(
        "wrote {} suggestion keys and {} directory entries",
        suggestion_key_count,
        directory_entry_count
    );

    let data = json!({
        "input": args.input,
        "records": record_count,
        "suggestion_keys": suggestion_key_count,
        "directory_entries": directory_entry_count,
        "suggestions_path": args.suggestions,
        "directory_path": args.directory,
    });

    Ok(CommandResult::ok(data).with_warnings(warnings))
}
