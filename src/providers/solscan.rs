use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::{encode_identifier, ProviderError, TokenDataProvider};
use crate::types::{HolderBalance, PartialRecord, TokenLinks};

const DEFAULT_BASE_URL: &str = "https://pro-api.solscan.io/v2.0";
const HOLDER_PAGE_SIZE: usize = 10;

/// Holder, supply and metadata source. Requires an API key, sent in the
/// `token` header.
pub struct SolscanProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl SolscanProvider {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self::with_base_url(api_key, timeout, DEFAULT_BASE_URL)
    }

    /// Construction-injected base URL so tests can point at a fixture server.
    pub fn with_base_url(api_key: String, timeout: Duration, base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
    ) -> Result<T, ProviderError> {
        let response = self
            .client
            .get(url)
            .header("token", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct MetaEnvelope {
    data: Option<TokenMeta>,
}

#[derive(Debug, Deserialize)]
struct TokenMeta {
    name: Option<String>,
    symbol: Option<String>,
    decimals: Option<u8>,
    supply: Option<String>,
    price: Option<f64>,
    market_cap: Option<f64>,
    price_change_24h: Option<f64>,
    volume_24h: Option<f64>,
    mint_authority: Option<String>,
    freeze_authority: Option<String>,
    tags: Option<Vec<String>>,
    metadata: Option<MetaExtras>,
}

#[derive(Debug, Deserialize)]
struct MetaExtras {
    website: Option<String>,
    twitter: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HoldersEnvelope {
    data: Option<HoldersData>,
}

#[derive(Debug, Deserialize)]
struct HoldersData {
    items: Option<Vec<HolderItem>>,
}

#[derive(Debug, Deserialize)]
struct HolderItem {
    address: String,
    amount: u128,
    owner: Option<String>,
}

#[async_trait]
impl TokenDataProvider for SolscanProvider {
    fn provider_name(&self) -> &str {
        "solscan"
    }

    async fn fetch(&self, query: &str) -> Result<Option<PartialRecord>, ProviderError> {
        let encoded = encode_identifier(query);
        let meta_url = format!("{}/token/meta?address={}", self.base_url, encoded);

        let envelope: MetaEnvelope = self.get_json(&meta_url).await?;
        let meta = match envelope.data {
            Some(meta) => meta,
            // 200 without the data key is a miss, not an error
            None => return Ok(None),
        };

        let mut record = PartialRecord {
            name: meta.name,
            symbol: meta.symbol,
            decimals: meta.decimals,
            price_usd: meta.price,
            market_cap_usd: meta.market_cap,
            price_change_24h_usd: meta.price_change_24h,
            volume_24h_usd: meta.volume_24h,
            supply_raw: meta.supply.and_then(|s| s.parse::<u128>().ok()),
            token_authority_present: Some(
                meta.mint_authority.is_some() || meta.freeze_authority.is_some(),
            ),
            links: TokenLinks {
                website: meta.metadata.as_ref().and_then(|m| m.website.clone()),
                twitter: meta.metadata.as_ref().and_then(|m| m.twitter.clone()),
                tag: meta.tags.and_then(|t| t.into_iter().next()),
                coingecko_id: None,
            },
            ..PartialRecord::default()
        };

        // Holder list is best-effort: a failure here degrades this provider's
        // holder contribution without discarding the metadata above.
        let holders_url = format!(
            "{}/token/holders?address={}&page=1&page_size={}",
            self.base_url, encoded, HOLDER_PAGE_SIZE
        );
        match self.get_json::<HoldersEnvelope>(&holders_url).await {
            Ok(envelope) => {
                let items = envelope.data.and_then(|d| d.items).unwrap_or_default();
                record.top_holders = items
                    .into_iter()
                    .map(|item| HolderBalance {
                        address: item.owner.unwrap_or(item.address),
                        amount_raw: item.amount,
                    })
                    .collect();
            }
            Err(e) => {
                tracing::warn!(provider = "solscan", error = %e, "holder fetch failed");
            }
        }

        Ok(Some(record))
    }
}
