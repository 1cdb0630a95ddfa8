use crate::data_models::ProfileRecord;
use crate::search::SearchProvider;
use crate::selector::select_linkedin_url;

pub fn build_search_query(company_name: &str) -> String {
    format!("linkedin company {company_name}")
}

/// Turns a company name into a [`ProfileRecord`] using a [`SearchProvider`].
pub struct ProfileResolver<S> {
    provider: S,
}

impl<S: SearchProvider> ProfileResolver<S> {
    pub fn new(provider: S) -> Self {
        ProfileResolver { provider }
    }

    pub fn provider(&self) -> &S {
        &self.provider
    }

    /// Resolve one company. Never fails: search errors become an
    /// [`InfoStatus::Error`](crate::data_models::InfoStatus::Error) record.
    pub async fn resolve(&self, company_name: &str) -> ProfileRecord {
        let query = build_search_query(company_name);
        tracing::debug!("searching for company '{company_name}' with query '{query}'");

        match self.provider.search(&query).await {
            Ok(results) => match select_linkedin_url(&results) {
                Some(url) => {
                    tracing::debug!("found {url} for '{company_name}'");
                    ProfileRecord::found(company_name.to_string(), query, url)
                }
                None => ProfileRecord::not_found(company_name.to_string(), query),
            },
            Err(e) => {
                tracing::error!("error while searching for '{company_name}': {e:#}");
                ProfileRecord::error(company_name.to_string(), query)
            }
        }
    }
}
