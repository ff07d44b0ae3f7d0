//! CSV ingestion of screener exports.
//!
//! Expects a header row with at least `Symbol`, `Name`, and `Market Cap`
//! columns; extra columns are ignored. Market caps that fail to parse as
//! numbers are carried as `None` rather than rejected.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::CoreError;
use crate::record::SecurityRecord;

/// Decode all records from CSV text.
pub fn read_records(reader: impl Read) -> Result<Vec<SecurityRecord>, CoreError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: SecurityRecord = row?;
        records.push(record);
    }

    log::debug!("ingested {} records", records.len());
    Ok(records)
}

/// Decode all records from a CSV file on disk.
pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<SecurityRecord>, CoreError> {
    let file = File::open(path.as_ref())?;
    read_records(file)
}
