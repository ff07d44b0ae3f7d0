//! Atomic artifact writes.
//!
//! Artifacts are written to a temporary file in the destination directory
//! and renamed into place, so a failed run never corrupts an artifact a
//! previous run produced.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::CliError;

pub fn write_json_atomic(path: &Path, payload: &str) -> Result<(), CliError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(payload.as_bytes())?;
    staged.flush()?;
    staged.persist(path).map_err(|error| CliError::Io(error.error))?;

    Ok(())
}
