use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::{encode_identifier, ProviderError, TokenDataProvider};
use crate::types::{PartialRecord, TokenLinks};

const DEFAULT_BASE_URL: &str = "https://public-api.birdeye.so";

/// Alternate metrics source. Covers price, absolute 24h change, volume,
/// liquidity and market cap from a single overview endpoint. Credential goes
/// in the `X-API-KEY` header.
pub struct BirdeyeProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl BirdeyeProvider {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self::with_base_url(api_key, timeout, DEFAULT_BASE_URL)
    }

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
}

#[derive(Debug, Deserialize)]
struct OverviewEnvelope {
    success: Option<bool>,
    data: Option<TokenOverview>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenOverview {
    name: Option<String>,
    symbol: Option<String>,
    decimals: Option<u8>,
    price: Option<f64>,
    price_change24h: Option<f64>,
    #[serde(rename = "v24hUSD")]
    v24h_usd: Option<f64>,
    liquidity: Option<f64>,
    supply: Option<f64>,
    mc: Option<f64>,
    extensions: Option<Extensions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Extensions {
    website: Option<String>,
    twitter: Option<String>,
    coingecko_id: Option<String>,
}

#[async_trait]
impl TokenDataProvider for BirdeyeProvider {
    fn provider_name(&self) -> &str {
        "birdeye"
    }

    async fn fetch(&self, query: &str) -> Result<Option<PartialRecord>, ProviderError> {
        let url = format!(
            "{}/defi/token_overview?address={}",
            self.base_url,
            encode_identifier(query)
        );

        let response = self
            .client
            .get(&url)
            .header("X-API-KEY", &self.api_key)
            .header("x-chain", "solana")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let text = response.text().await?;
        let envelope: OverviewEnvelope =
            serde_json::from_str(&text).map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let overview = match envelope.data {
            Some(data) if envelope.success != Some(false) => data,
            _ => return Ok(None),
        };

        let links = match &overview.extensions {
            Some(ext) => TokenLinks {
                website: ext.website.clone(),
                twitter: ext.twitter.clone(),
                tag: None,
                coingecko_id: ext.coingecko_id.clone(),
            },
            None => TokenLinks::default(),
        };

        Ok(Some(PartialRecord {
            name: overview.name,
            symbol: overview.symbol,
            decimals: overview.decimals,
            price_usd: overview.price,
            price_change_24h_usd: overview.price_change24h,
            volume_24h_usd: overview.v24h_usd,
            liquidity_usd: overview.liquidity,
            // supply arrives already scaled to human units
            total_supply: overview.supply,
            market_cap_usd: overview.mc,
            links,
            ..PartialRecord::default()
        }))
    }
}
