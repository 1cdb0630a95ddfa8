use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use linkedin_finder::resolver::build_search_query;
use linkedin_finder::{
    BatchRunner, InfoStatus, ProfileRecord, ProfileResolver, SearchError, SearchProvider,
    SearchResult,
};

mod test_helpers {
    use super::*;

    pub enum Canned {
        Results(Vec<SearchResult>),
        Fail,
        Panic,
        Slow(u64, Vec<SearchResult>),
    }

    /// In-memory provider answering by exact query string.
    #[derive(Default)]
    pub struct FakeSearch {
        responses: HashMap<String, Canned>,
        pub calls: Mutex<Vec<String>>,
    }

    impl FakeSearch {
        pub fn with(mut self, company: &str, canned: Canned) -> Self {
            self.responses.insert(build_search_query(company), canned);
            self
        }
    }

    impl SearchProvider for FakeSearch {
        async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
            self.calls.lock().unwrap().push(query.to_string());
            match self.responses.get(query) {
                Some(Canned::Results(results)) => Ok(results.clone()),
                Some(Canned::Slow(millis, results)) => {
                    tokio::time::sleep(Duration::from_millis(*millis)).await;
                    Ok(results.clone())
                }
                Some(Canned::Fail) => Err(SearchError::Status {
                    status: 503,
                    url: "https://www.bing.com/search".to_string(),
                }),
                Some(Canned::Panic) => panic!("provider blew up on {query}"),
                None => Ok(Vec::new()),
            }
        }
    }

    pub fn hit(url: &str) -> SearchResult {
        SearchResult::new("title", url, "")
    }

    pub fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }
}

use test_helpers::*;

#[test]
fn test_query_is_deterministic() {
    assert_eq!(build_search_query("Acme Inc"), "linkedin company Acme Inc");
    assert_eq!(build_search_query("Acme Inc"), build_search_query("Acme Inc"));
}

#[tokio::test]
async fn test_resolve_found() {
    let provider = FakeSearch::default().with(
        "Acme Inc",
        Canned::Results(vec![
            hit("https://acme.example.com/"),
            hit("https://www.linkedin.com/company/acme-inc/"),
        ]),
    );
    let resolver = ProfileResolver::new(provider);

    let record = resolver.resolve("Acme Inc").await;
    assert_eq!(record.company_name(), "Acme Inc");
    assert_eq!(record.search_query(), "linkedin company Acme Inc");
    assert_eq!(
        record.linkedin_url(),
        Some("https://www.linkedin.com/company/acme-inc/")
    );
    assert_eq!(record.info_status(), InfoStatus::Found);
    assert_eq!(
        *resolver.provider().calls.lock().unwrap(),
        vec!["linkedin company Acme Inc"]
    );
}

#[tokio::test]
async fn test_resolve_not_found() {
    let provider = FakeSearch::default().with(
        "Globex",
        Canned::Results(vec![hit("https://globex.example.com/")]),
    );
    let record = ProfileResolver::new(provider).resolve("Globex").await;
    assert_eq!(record.linkedin_url(), None);
    assert_eq!(record.info_status(), InfoStatus::NotFound);
}

#[tokio::test]
async fn test_resolve_search_error_becomes_error_record() {
    let provider = FakeSearch::default().with("Initech", Canned::Fail);
    let record = ProfileResolver::new(provider).resolve("Initech").await;
    assert_eq!(record.linkedin_url(), None);
    assert_eq!(record.info_status(), InfoStatus::Error);
    assert_eq!(record.search_query(), "linkedin company Initech");
}

#[tokio::test]
async fn test_batch_scenario_preserves_order() {
    let provider = FakeSearch::default()
        .with(
            "Acme Inc",
            Canned::Results(vec![hit("https://www.linkedin.com/company/acme-inc/")]),
        )
        .with(
            "Globex",
            Canned::Results(vec![hit("https://globex.example.com/")]),
        );
    let runner = BatchRunner::new(ProfileResolver::new(provider), 1);

    let records = runner.run(&names(&["Acme Inc", "Globex"])).await;
    assert_eq!(
        records,
        vec![
            ProfileRecord::found(
                "Acme Inc".into(),
                "linkedin company Acme Inc".into(),
                "https://www.linkedin.com/company/acme-inc/".into(),
            ),
            ProfileRecord::not_found("Globex".into(), "linkedin company Globex".into()),
        ]
    );
}

#[tokio::test]
async fn test_batch_continues_after_failure() {
    let provider = FakeSearch::default()
        .with("Initech", Canned::Fail)
        .with(
            "Acme Inc",
            Canned::Results(vec![hit("https://www.linkedin.com/company/acme-inc/")]),
        );
    let runner = BatchRunner::new(ProfileResolver::new(provider), 1);

    let records = runner.run(&names(&["Initech", "Acme Inc", "Globex"])).await;
    let statuses: Vec<_> = records.iter().map(|r| r.info_status()).collect();
    assert_eq!(
        statuses,
        vec![InfoStatus::Error, InfoStatus::Found, InfoStatus::NotFound]
    );
}

#[tokio::test]
async fn test_batch_panic_yields_fallback_record() {
    let provider = FakeSearch::default().with("Umbrella", Canned::Panic).with(
        "Acme Inc",
        Canned::Results(vec![hit("https://www.linkedin.com/company/acme-inc/")]),
    );
    let runner = BatchRunner::new(ProfileResolver::new(provider), 1);

    let records = runner.run(&names(&["Umbrella", "Acme Inc"])).await;
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        ProfileRecord::error("Umbrella".into(), "linkedin Umbrella".into())
    );
    assert_eq!(records[1].info_status(), InfoStatus::Found);
}

#[tokio::test]
async fn test_concurrent_batch_keeps_input_order() {
    let provider = FakeSearch::default()
        .with(
            "Slow Co",
            Canned::Slow(200, vec![hit("https://www.linkedin.com/company/slow-co/")]),
        )
        .with(
            "Fast Co",
            Canned::Slow(1, vec![hit("https://www.linkedin.com/company/fast-co/")]),
        );
    let runner = BatchRunner::new(ProfileResolver::new(provider), 4);

    let input = names(&["Slow Co", "Fast Co", "Globex"]);
    let records = runner.run(&input).await;
    let order: Vec<_> = records.iter().map(|r| r.company_name()).collect();
    assert_eq!(order, vec!["Slow Co", "Fast Co", "Globex"]);
}

#[tokio::test]
async fn test_duplicate_names_are_kept() {
    let runner = BatchRunner::new(ProfileResolver::new(FakeSearch::default()), 2);
    let records = runner.run(&names(&["Globex", "Globex"])).await;
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_empty_batch() {
    let runner = BatchRunner::new(ProfileResolver::new(FakeSearch::default()), 1);
    assert!(runner.run(&[]).await.is_empty());
}
