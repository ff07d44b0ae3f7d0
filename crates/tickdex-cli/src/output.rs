use crate::commands::Report;
use crate::error::CliError;

pub fn render(report: &Report, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{payload}");

    Ok(())
}
