//! Writers that render a batch of [`ProfileRecord`]s to disk.
//!
//! Every format is a plain function `(records, path) -> Result`, looked up
//! through [`ExportFormat::writer`]. Writers share nothing but the record
//! slice, create their own parent directory, and log then return any failure.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::data_models::ProfileRecord;
use crate::error::{ExportError, UnknownFormat};

pub mod json;
pub mod rss;
pub mod tabular;
pub mod xlsx;
pub mod xml;

pub const BASE_NAME: &str = "linkedin_company_urls";

pub type ExportFn = fn(&[ProfileRecord], &Path) -> Result<(), ExportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Csv,
    Excel,
    Xml,
    Rss,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Json,
        ExportFormat::Csv,
        ExportFormat::Excel,
        ExportFormat::Xml,
        ExportFormat::Rss,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "excel",
            ExportFormat::Xml => "xml",
            ExportFormat::Rss => "rss",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Xml => "xml",
            ExportFormat::Rss => "rss.xml",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{BASE_NAME}.{}", self.extension())
    }

    pub fn writer(&self) -> ExportFn {
        match self {
            ExportFormat::Json => json::write_json,
            ExportFormat::Csv => tabular::write_csv,
            ExportFormat::Excel => xlsx::write_xlsx,
            ExportFormat::Xml => xml::write_xml,
            ExportFormat::Rss => rss::write_rss,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.id() == wanted)
            .ok_or_else(|| UnknownFormat(s.trim().to_string()))
    }
}

/// Parse requested format ids, dropping unknown ones with a warning and
/// removing duplicates while keeping the first occurrence's position.
pub fn parse_formats<S: AsRef<str>>(requested: &[S]) -> Vec<ExportFormat> {
    let mut formats = Vec::new();
    let mut invalid = Vec::new();

    for raw in requested.iter().map(AsRef::as_ref) {
        if raw.trim().is_empty() {
            continue;
        }
        match raw.parse::<ExportFormat>() {
            Ok(format) if !formats.contains(&format) => formats.push(format),
            Ok(_) => {}
            Err(UnknownFormat(id)) => invalid.push(id),
        }
    }

    if !invalid.is_empty() {
        let mut valid: Vec<_> = ExportFormat::ALL.iter().map(ExportFormat::id).collect();
        valid.sort_unstable();
        tracing::warn!(
            "ignoring invalid formats: {}. valid options are: {}",
            invalid.join(", "),
            valid.join(", ")
        );
    }
    formats
}

/// Run every requested writer against `output_dir`, returning each outcome.
///
/// A failing format does not stop the others; what to do with failures is up
/// to the caller.
pub fn export_all(
    records: &[ProfileRecord],
    output_dir: &Path,
    formats: &[ExportFormat],
) -> Vec<(ExportFormat, Result<PathBuf, ExportError>)> {
    formats
        .iter()
        .map(|format| {
            let path = output_dir.join(format.file_name());
            let result = (format.writer())(records, &path).map(|()| path);
            (*format, result)
        })
        .collect()
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), ExportError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).inspect_err(|e| {
            tracing::error!("failed to create directory {}: {e}", dir.display())
        })?;
    }
    Ok(())
}

pub(crate) fn log_outcome(
    label: &str,
    path: &Path,
    count: usize,
    result: Result<(), ExportError>,
) -> Result<(), ExportError> {
    match &result {
        Ok(()) => tracing::info!("{label} exported to {} ({count} records)", path.display()),
        Err(e) => tracing::error!("failed to write {label} to {}: {e}", path.display()),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(ExportFormat::Json.file_name(), "linkedin_company_urls.json");
        assert_eq!(ExportFormat::Excel.file_name(), "linkedin_company_urls.xlsx");
        assert_eq!(ExportFormat::Rss.file_name(), "linkedin_company_urls.rss.xml");
    }

    #[test]
    fn test_parse_formats() {
        let requested = [" JSON", "csv", "pdf", "", "json", "Excel", "rss"];
        assert_eq!(
            parse_formats(&requested),
            vec![
                ExportFormat::Json,
                ExportFormat::Csv,
                ExportFormat::Excel,
                ExportFormat::Rss,
            ]
        );
        assert!(parse_formats(&["yaml", "txt"]).is_empty());
    }

    #[test]
    fn test_unknown_format_error() {
        assert_eq!(
            "xlsx".parse::<ExportFormat>(),
            Err(UnknownFormat("xlsx".to_string()))
        );
    }
}
