use std::collections::BTreeSet;
use std::path::Path;

use super::{ensure_parent_dir, log_outcome};
use crate::data_models::ProfileRecord;
use crate::error::ExportError;

/// Sorted union of the field names present across `records`.
pub fn header_fields(records: &[ProfileRecord]) -> Vec<&'static str> {
    records
        .iter()
        .flat_map(|record| record.fields().into_iter().map(|(key, _)| key))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// CSV with a sorted header row. An empty batch writes nothing.
pub fn write_csv(records: &[ProfileRecord], path: &Path) -> Result<(), ExportError> {
    if records.is_empty() {
        tracing::warn!("no records to write to CSV, skipping");
        return Ok(());
    }
    ensure_parent_dir(path)?;
    log_outcome("CSV", path, records.len(), render(records, path))
}

fn render(records: &[ProfileRecord], path: &Path) -> Result<(), ExportError> {
    let header = header_fields(records);
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&header)?;
    for record in records {
        writer.write_record(header.iter().map(|key| record.field(key).unwrap_or("")))?;
    }
    writer.flush()?;
    Ok(())
}
