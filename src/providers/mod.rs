// src/providers/mod.rs

use async_trait::async_trait;
use thiserror::Error;
use url::form_urlencoded;

use crate::types::PartialRecord;

#[derive(Clone, Debug, Error)]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

/// One external data source. Every provider fills the same shared
/// `PartialRecord` shape, differing only in how completely it fills it.
///
/// `Ok(None)` is the explicit no-data signal: the provider answered but has
/// no record for this query (for example an HTTP 200 with an empty pair
/// list). Errors are transport or status failures and are degraded to
/// no-data at the caller boundary, never propagated as fatal.
#[async_trait]
pub trait TokenDataProvider: Send + Sync {
    fn provider_name(&self) -> &str;

    async fn fetch(&self, query: &str) -> Result<Option<PartialRecord>, ProviderError>;
}

/// Percent-encode a caller-supplied identifier before it is inserted into a
/// URL. Symbols can contain reserved characters that would otherwise break
/// query syntax.
pub fn encode_identifier(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

// Module declarations
pub mod mocks;
pub mod solscan;
pub mod dexscreener;
pub mod birdeye;

// Re-export for wiring and testing
pub use mocks::MockProvider;
pub use solscan::SolscanProvider;
pub use dexscreener::DexscreenerProvider;
pub use birdeye::BirdeyeProvider;
