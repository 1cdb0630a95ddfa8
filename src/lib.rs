pub mod batch;
pub mod config;
pub mod data_models;
pub mod error;
pub mod export;
pub mod input;
pub mod resolver;
pub mod search;
pub mod selector;

pub use batch::BatchRunner;
pub use config::{FinderConfig, SearchEngine, Settings};
pub use data_models::{InfoStatus, ProfileRecord, SearchResult};
pub use error::{ExportError, SearchError};
pub use export::{ExportFormat, export_all, parse_formats};
pub use resolver::ProfileResolver;
pub use search::{BingClient, SearchProvider};
pub use selector::select_linkedin_url;
