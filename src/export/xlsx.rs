use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use super::{ensure_parent_dir, log_outcome};
use crate::data_models::ProfileRecord;
use crate::error::ExportError;

/// Single-sheet workbook, columns in record field order. An empty batch writes nothing.
pub fn write_xlsx(records: &[ProfileRecord], path: &Path) -> Result<(), ExportError> {
    if records.is_empty() {
        tracing::warn!("no records to write to Excel, skipping");
        return Ok(());
    }
    ensure_parent_dir(path)?;
    log_outcome("Excel", path, records.len(), render(records, path))
}

fn render(records: &[ProfileRecord], path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    for (col, name) in ProfileRecord::FIELD_NAMES.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, (_, value)) in record.fields().into_iter().enumerate() {
            // nulls stay blank
            if let Some(value) = value {
                worksheet.write_string(row, col as u16, value)?;
            }
        }
    }
    worksheet.autofit();

    workbook.save(path)?;
    Ok(())
}
