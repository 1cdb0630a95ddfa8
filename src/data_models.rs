use serde::{Deserialize, Serialize};

use crate::error::InconsistentRecord;

/// One organic hit scraped from a search results page.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>, snippet: impl Into<String>) -> Self {
        SearchResult {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoStatus {
    #[serde(rename = "LinkedIn Found")]
    Found,
    #[serde(rename = "LinkedIn Not Found")]
    NotFound,
    #[serde(rename = "Error")]
    Error,
}

impl InfoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoStatus::Found => "LinkedIn Found",
            InfoStatus::NotFound => "LinkedIn Not Found",
            InfoStatus::Error => "Error",
        }
    }
}

impl std::fmt::Display for InfoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The normalized result for a single company.
///
/// Records are only built through [`ProfileRecord::found`],
/// [`ProfileRecord::not_found`] and [`ProfileRecord::error`], so a record
/// carries a `linkedin_url` exactly when its status is [`InfoStatus::Found`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "RawProfileRecord")]
pub struct ProfileRecord {
    company_name: String,
    search_query: String,
    linkedin_url: Option<String>,
    info_status: InfoStatus,
}

/// Wire shape of a record before the status/URL pairing is checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfileRecord {
    company_name: String,
    search_query: String,
    linkedin_url: Option<String>,
    info_status: InfoStatus,
}

impl TryFrom<RawProfileRecord> for ProfileRecord {
    type Error = InconsistentRecord;

    fn try_from(raw: RawProfileRecord) -> Result<Self, Self::Error> {
        match (raw.info_status, raw.linkedin_url) {
            (InfoStatus::Found, Some(url)) => {
                Ok(ProfileRecord::found(raw.company_name, raw.search_query, url))
            }
            (InfoStatus::NotFound, None) => {
                Ok(ProfileRecord::not_found(raw.company_name, raw.search_query))
            }
            (InfoStatus::Error, None) => Ok(ProfileRecord::error(raw.company_name, raw.search_query)),
            (status, url) => Err(InconsistentRecord {
                company_name: raw.company_name,
                status,
                has_url: url.is_some(),
            }),
        }
    }
}

impl ProfileRecord {
    /// Field names in declaration order, as they appear in every export.
    pub const FIELD_NAMES: [&'static str; 4] =
        ["companyName", "searchQuery", "linkedinUrl", "infoStatus"];

    pub fn found(company_name: String, search_query: String, linkedin_url: String) -> ProfileRecord {
        ProfileRecord {
            company_name,
            search_query,
            linkedin_url: Some(linkedin_url),
            info_status: InfoStatus::Found,
        }
    }

    pub fn not_found(company_name: String, search_query: String) -> ProfileRecord {
        ProfileRecord {
            company_name,
            search_query,
            linkedin_url: None,
            info_status: InfoStatus::NotFound,
        }
    }

    pub fn error(company_name: String, search_query: String) -> ProfileRecord {
        ProfileRecord {
            company_name,
            search_query,
            linkedin_url: None,
            info_status: InfoStatus::Error,
        }
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn linkedin_url(&self) -> Option<&str> {
        self.linkedin_url.as_deref()
    }

    pub fn info_status(&self) -> InfoStatus {
        self.info_status
    }

    /// `(field name, value)` pairs in declaration order. `None` marks a null.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 4] {
        [
            (Self::FIELD_NAMES[0], Some(self.company_name.as_str())),
            (Self::FIELD_NAMES[1], Some(self.search_query.as_str())),
            (Self::FIELD_NAMES[2], self.linkedin_url.as_deref()),
            (Self::FIELD_NAMES[3], Some(self.info_status.as_str())),
        ]
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields()
            .into_iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| value)
    }
}
