use std::sync::Arc;
use std::time::Duration;

use super::types::{DescribeResponse, QueryStatus, UsageError};
use crate::metrics::compute;
use crate::normalize::merge;
use crate::providers::TokenDataProvider;
use crate::report::{compose, not_supported, Report};
use crate::types::PartialRecord;

/// Major tokens the pipeline deliberately does not describe.
const EXCLUDED_SYMBOLS: &[&str] = &["ETH", "BTC", "BONK"];

/// The command surface hands over its raw argument list; exactly one
/// identifier is accepted.
pub fn parse_query(args: &[String]) -> Result<&str, UsageError> {
    match args {
        [] => Err(UsageError::MissingQuery),
        [query] if query.trim().is_empty() => Err(UsageError::MissingQuery),
        [query] => Ok(query.trim()),
        _ => Err(UsageError::TooManyIdentifiers(args.len())),
    }
}

/// Issue one fetch per provider concurrently and wait for every one of them
/// to settle before merging. A provider that errors or times out degrades to
/// no-data; later-priority providers must not be merged before earlier ones
/// have had their chance to answer. The slice order of `providers` is the
/// merge priority order.
async fn gather(
    query: &str,
    providers: &[Arc<dyn TokenDataProvider>],
    fetch_timeout: Duration,
) -> Vec<PartialRecord> {
    let fetches = providers.iter().map(|provider| {
        let provider = Arc::clone(provider);
        async move {
            let name = provider.provider_name().to_string();
            match tokio::time::timeout(fetch_timeout, provider.fetch(query)).await {
                Ok(Ok(Some(record))) => Some(record),
                Ok(Ok(None)) => {
                    tracing::debug!(provider = %name, query, "no data");
                    None
                }
                Ok(Err(e)) => {
                    tracing::warn!(provider = %name, query, error = %e, "provider fetch failed");
                    None
                }
                Err(_) => {
                    tracing::warn!(provider = %name, query, "provider fetch timed out");
                    None
                }
            }
        }
    });

    // join_all is the barrier: results come back in provider order
    futures::future::join_all(fetches)
        .await
        .into_iter()
        .flatten()
        .collect()
}

/// Full pipeline for one query: fetch from every provider, merge, derive
/// metrics, compose. Always yields a renderable report; a fully-failed
/// query renders the not-found variant.
pub async fn describe(
    query: &str,
    providers: &[Arc<dyn TokenDataProvider>],
    fetch_timeout: Duration,
) -> DescribeResponse {
    if EXCLUDED_SYMBOLS
        .iter()
        .any(|s| s.eq_ignore_ascii_case(query))
    {
        return response_from(query, QueryStatus::NotFound, not_supported(query));
    }

    let partials = gather(query, providers, fetch_timeout).await;
    let snapshot = merge(query, &partials);
    let status = if snapshot.has_data() {
        QueryStatus::Found
    } else {
        QueryStatus::NotFound
    };
    let metrics = compute(&snapshot);
    let report = compose(&snapshot, &metrics);

    response_from(query, status, report)
}

fn response_from(query: &str, status: QueryStatus, report: Report) -> DescribeResponse {
    DescribeResponse {
        status,
        query: query.to_string(),
        report_text: report.text(),
        action_links: report.action_links,
    }
}
