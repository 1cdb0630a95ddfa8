use std::sync::Arc;

use futures::StreamExt;
use futures::stream;

use crate::data_models::ProfileRecord;
use crate::resolver::ProfileResolver;
use crate::search::SearchProvider;

/// Record used when resolving a company blew up instead of returning.
pub fn fallback_record(company_name: &str) -> ProfileRecord {
    ProfileRecord::error(company_name.to_string(), format!("linkedin {company_name}"))
}

/// Resolves a list of companies, keeping records in input order.
pub struct BatchRunner<S> {
    resolver: Arc<ProfileResolver<S>>,
    concurrency: usize,
}

impl<S> BatchRunner<S>
where
    S: SearchProvider + 'static,
{
    /// `concurrency` bounds how many companies are in flight; 1 means one at a time.
    pub fn new(resolver: ProfileResolver<S>, concurrency: usize) -> Self {
        BatchRunner {
            resolver: Arc::new(resolver),
            concurrency: concurrency.max(1),
        }
    }

    pub async fn run(&self, company_names: &[String]) -> Vec<ProfileRecord> {
        let total = company_names.len();

        stream::iter(company_names.iter().cloned().enumerate())
            .map(|(i, name)| {
                let resolver = self.resolver.clone();
                async move {
                    tracing::info!("processing {} / {}: {}", i + 1, total, name);
                    let task_name = name.clone();
                    let handle =
                        tokio::spawn(async move { resolver.resolve(&task_name).await });
                    match handle.await {
                        Ok(record) => record,
                        Err(e) => {
                            tracing::error!("unexpected error while processing '{name}': {e}");
                            fallback_record(&name)
                        }
                    }
                }
            })
            // `buffered` yields in submission order, not completion order.
            .buffered(self.concurrency)
            .collect()
            .await
    }
}
