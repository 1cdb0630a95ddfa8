use std::path::PathBuf;

use thiserror::Error;

use crate::data_models::InfoStatus;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file {path} not found")]
    NotFound { path: PathBuf },

    #[error("failed to read input file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown export format '{0}'")]
pub struct UnknownFormat(pub String);

#[derive(Debug, Error)]
#[error("record for '{company_name}' has status '{status}' with has_url={has_url}")]
pub struct InconsistentRecord {
    pub company_name: String,
    pub status: InfoStatus,
    pub has_url: bool,
}
