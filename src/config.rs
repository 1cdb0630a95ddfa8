use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ConfigError;

pub const DEFAULT_USER_AGENT: &str = "LinkedInCompanyFinderBot/1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Run settings read from a JSON file. Keys missing from the file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub search_engine: String,
    pub request_timeout: u64,
    pub user_agent: String,
    pub output_formats: Vec<String>,
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            search_engine: "bing".to_string(),
            request_timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_formats: vec!["json".to_string()],
            input_file: PathBuf::from("data/company_list.sample.txt"),
            output_dir: PathBuf::from("data"),
        }
    }
}

fn apply_key<T: DeserializeOwned>(doc: &Map<String, Value>, key: &str, slot: &mut T, path: &Path) {
    let Some(value) = doc.get(key) else {
        return;
    };
    match serde_json::from_value::<T>(value.clone()) {
        Ok(parsed) => *slot = parsed,
        Err(e) => tracing::warn!(
            "ignoring invalid '{key}' in config file {}: {e}, keeping default",
            path.display()
        ),
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file, malformed JSON, or a non-object document falls back to
    /// [`Settings::default`]. Only unexpected read failures are errors.
    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("config file {} not found, using defaults", path.display());
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Ok(Self::from_json(&raw, path))
    }

    /// Merge a settings document over the defaults key by key. A key with a
    /// value of the wrong type keeps its default; the other keys still apply.
    fn from_json(raw: &str, path: &Path) -> Settings {
        let mut settings = Settings::default();
        let doc = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(doc)) => doc,
            Ok(_) => {
                tracing::warn!(
                    "config file {} does not contain a JSON object, using defaults",
                    path.display()
                );
                return settings;
            }
            Err(e) => {
                tracing::warn!(
                    "failed to parse config file {}: {}, using defaults",
                    path.display(),
                    e
                );
                return settings;
            }
        };

        apply_key(&doc, "search_engine", &mut settings.search_engine, path);
        apply_key(&doc, "request_timeout", &mut settings.request_timeout, path);
        apply_key(&doc, "user_agent", &mut settings.user_agent, path);
        apply_key(&doc, "output_formats", &mut settings.output_formats, path);
        apply_key(&doc, "input_file", &mut settings.input_file, path);
        apply_key(&doc, "output_dir", &mut settings.output_dir, path);
        settings
    }

    pub fn finder_config(&self) -> FinderConfig {
        FinderConfig::new(&self.search_engine, self.request_timeout, &self.user_agent)
    }
}

/// Search providers the finder knows how to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    Bing,
}

impl SearchEngine {
    /// Map a configured provider id onto a supported provider.
    ///
    /// Unknown ids are coerced to [`SearchEngine::Bing`] with a warning.
    pub fn normalize(id: &str) -> SearchEngine {
        if !id.trim().eq_ignore_ascii_case("bing") {
            tracing::warn!("unsupported search engine '{id}', falling back to 'bing'");
        }
        SearchEngine::Bing
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEngine::Bing => "bing",
        }
    }
}

/// The slice of settings the resolution pipeline consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    pub search_engine: SearchEngine,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl FinderConfig {
    pub fn new(search_engine: &str, timeout_secs: u64, user_agent: &str) -> FinderConfig {
        let user_agent = if user_agent.trim().is_empty() {
            DEFAULT_USER_AGENT.to_string()
        } else {
            user_agent.to_string()
        };
        FinderConfig {
            search_engine: SearchEngine::normalize(search_engine),
            timeout_secs,
            user_agent,
        }
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        FinderConfig::new("bing", DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT)
    }
}
