use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use super::{ProviderError, TokenDataProvider};
use crate::types::PartialRecord;

/// Deterministic in-memory provider for tests. Returns a canned record per
/// query, an injected error, or no-data for anything unregistered.
pub struct MockProvider {
    pub name: String,
    pub records: HashMap<String, PartialRecord>,
    pub failures: HashMap<String, ProviderError>,
    pub latency: Option<Duration>,
}

impl MockProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            records: HashMap::new(),
            failures: HashMap::new(),
            latency: None,
        }
    }

    pub fn with_record(mut self, query: &str, record: PartialRecord) -> Self {
        self.records.insert(query.to_string(), record);
        self
    }

    pub fn with_failure(mut self, query: &str, error: ProviderError) -> Self {
        self.failures.insert(query.to_string(), error);
        self
    }

    /// Delay every fetch, for exercising the per-fetch timeout.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl TokenDataProvider for MockProvider {
    fn provider_name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, query: &str) -> Result<Option<PartialRecord>, ProviderError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if let Some(error) = self.failures.get(query) {
            return Err(error.clone());
        }

        Ok(self.records.get(query).cloned())
    }
}
