use std::future::Future;
use std::sync::OnceLock;
use std::time::Duration;

use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use scraper::{Html, Selector};

use crate::config::FinderConfig;
use crate::data_models::SearchResult;
use crate::error::SearchError;

pub const BING_BASE_URL: &str = "https://www.bing.com";
pub const FALLBACK_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

static RESULT_SELECTOR: OnceLock<Selector> = OnceLock::new();
static ANCHOR_SELECTOR: OnceLock<Selector> = OnceLock::new();
static SNIPPET_SELECTOR: OnceLock<Selector> = OnceLock::new();

fn result_selector() -> &'static Selector {
    RESULT_SELECTOR.get_or_init(|| Selector::parse("li.b_algo").expect("valid selector"))
}

fn anchor_selector() -> &'static Selector {
    ANCHOR_SELECTOR.get_or_init(|| Selector::parse("a").expect("valid selector"))
}

fn snippet_selector() -> &'static Selector {
    SNIPPET_SELECTOR.get_or_init(|| Selector::parse("p").expect("valid selector"))
}

/// A web search backend that turns a query into ranked results.
pub trait SearchProvider: Send + Sync {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SearchResult>, SearchError>> + Send;
}

/// Scrapes the Bing HTML results page.
pub struct BingClient {
    client: reqwest::Client,
    base_url: String,
}

impl BingClient {
    pub fn new(config: &FinderConfig) -> Result<BingClient, SearchError> {
        let user_agent = if config.user_agent.trim().is_empty() {
            FALLBACK_USER_AGENT
        } else {
            config.user_agent.as_str()
        };

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(BingClient {
            client,
            base_url: BING_BASE_URL.to_string(),
        })
    }

    /// Point the client at another host serving Bing-shaped pages.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> BingClient {
        self.base_url = base_url.into();
        self
    }
}

impl SearchProvider for BingClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        tracing::debug!("issuing bing request: {url} q={query}");

        let res = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .inspect_err(|e| tracing::error!("bing request failed: {e}"))?;

        let status = res.status();
        if !status.is_success() {
            tracing::error!("bing request to {url} returned {status}");
            return Err(SearchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = res.text().await?;
        let results = parse_bing_results(&body);
        tracing::debug!(
            "parsed {} results from bing for query '{query}'",
            results.len()
        );
        Ok(results)
    }
}

/// Extract results from a Bing results page.
///
/// Each `li.b_algo` block contributes its first link and, when present, the
/// text of its first paragraph. Blocks without a usable link are skipped.
pub fn parse_bing_results(html: &str) -> Vec<SearchResult> {
    let document = Html::parse_document(html);
    let mut results = Vec::new();

    for container in document.select(result_selector()) {
        let Some(anchor) = container.select(anchor_selector()).next() else {
            continue;
        };
        let Some(href) = anchor
            .value()
            .attr("href")
            .map(str::trim)
            .filter(|href| !href.is_empty())
        else {
            continue;
        };

        let title = collapse_whitespace(anchor.text());
        let snippet = container
            .select(snippet_selector())
            .next()
            .map(|p| collapse_whitespace(p.text()))
            .unwrap_or_default();

        results.push(SearchResult::new(title, href, snippet));
    }

    results
}

fn collapse_whitespace<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body><ol id="b_results">
          <li class="b_algo">
            <h2><a href="https://www.linkedin.com/company/acme-inc/">Acme Inc | <strong>LinkedIn</strong></a></h2>
            <div class="b_caption"><p>Acme Inc.   builds
              anvils.</p></div>
          </li>
          <li class="b_algo"><h2>No link here</h2></li>
          <li class="b_algo"><a>Anchor without href</a></li>
          <li class="b_ad"><a href="https://ads.example.com/">Sponsored</a></li>
          <li class="b_algo"><a href="/relative/path">Relative</a></li>
        </ol></body></html>
    "#;

    #[test]
    fn test_parse_bing_results() {
        let results = parse_bing_results(PAGE);
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].title, "Acme Inc | LinkedIn");
        assert_eq!(results[0].url, "https://www.linkedin.com/company/acme-inc/");
        assert_eq!(results[0].snippet, "Acme Inc. builds anvils.");

        assert_eq!(results[1].url, "/relative/path");
        assert_eq!(results[1].snippet, "");
    }

    #[test]
    fn test_parse_empty_page() {
        assert!(parse_bing_results("").is_empty());
        assert!(parse_bing_results("<html><body><p>captcha</p></body></html>").is_empty());
    }
}
