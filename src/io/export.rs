//! Export mapped records to JSON.
//!
//! Lets a price list be inspected exactly as it would be written, without
//! touching the destination store.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::ProductRecord;
use crate::error::{AppError, EXIT_INPUT};

/// Write records as a pretty-printed JSON array.
pub fn write_records_json(path: &Path, records: &[ProductRecord]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            EXIT_INPUT,
            format!("Failed to create export JSON '{}': {e}", path.display()),
        )
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to write export JSON: {e}")))?;
    writer.flush().map_err(|e| {
        AppError::new(
            EXIT_INPUT,
            format!("Failed to write export JSON '{}': {e}", path.display()),
        )
    })?;

    Ok(())
}
