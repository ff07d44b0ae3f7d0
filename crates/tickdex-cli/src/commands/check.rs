use serde_json::json;

use tickdex_core::read_records_from_path;

use crate::cli::CheckArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &CheckArgs) -> Result<CommandResult, CliError> {
    let records = read_records_from_path(&args.input)?;
    let warnings = super::data_quality_warnings(&records);

    let empty_symbols = records
        .iter()
        .filter(|record| record.symbol.trim().is_empty())
        .count();
    let missing_market_caps = records
        .iter()
        .filter(|record| record.market_cap.is_none())
        .count();

    let data = json!({
        "input": args.input,
        "records": records.len(),
        "empty_symbols": empty_symbols,
        "missing_market_caps": missing_market_caps,
    });

    Ok(CommandResult::ok(data).with_warnings(warnings))
}
