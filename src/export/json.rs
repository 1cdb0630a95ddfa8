use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{ensure_parent_dir, log_outcome};
use crate::data_models::ProfileRecord;
use crate::error::ExportError;

/// Pretty-printed JSON array. Non-ASCII text is written as-is.
pub fn write_json(records: &[ProfileRecord], path: &Path) -> Result<(), ExportError> {
    ensure_parent_dir(path)?;
    log_outcome("JSON", path, records.len(), render(records, path))
}

fn render(records: &[ProfileRecord], path: &Path) -> Result<(), ExportError> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, records)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
