//! JSON artifact export
//!
//! Writes the full accumulated record sequence (not just the summary) to a
//! single JSON file, overwriting any existing file at that path. `amount`
//! is serialized as a decimal string, so full precision survives the round
//! trip.

use crate::error::{Error, Result};
use crate::model::BalanceRecord;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write all records to `path` as a pretty-printed JSON array.
///
/// Parent directories are created on demand. Failures surface as
/// [`Error::Export`] so the caller can distinguish them from fetch
/// failures and still report the in-memory summary.
pub fn write_records(path: &Path, records: &[BalanceRecord]) -> Result<()> {
    let display_path = path.display().to_string();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::export(&display_path, format!("creating directory: {e}")))?;
        }
    }

    let file =
        File::create(path).map_err(|e| Error::export(&display_path, format!("creating file: {e}")))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| Error::export(&display_path, format!("serializing records: {e}")))?;
    writer
        .flush()
        .map_err(|e| Error::export(&display_path, e.to_string()))?;

    info!("Wrote {} records to {}", records.len(), display_path);
    Ok(())
}

/// Load a previously exported artifact
pub fn read_records(path: &Path) -> Result<Vec<BalanceRecord>> {
    let file = File::open(path)?;
    let records = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}
