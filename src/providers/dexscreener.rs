use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::{encode_identifier, ProviderError, TokenDataProvider};
use crate::types::{PartialRecord, TokenLinks};

const DEFAULT_BASE_URL: &str = "https://api.dexscreener.com";

/// Pair-price source. Public endpoint, no credential. One token can trade in
/// several pairs; volume and liquidity are summed across all of them while
/// price and metadata come from the first listed pair.
pub struct DexscreenerProvider {
    base_url: String,
    client: reqwest::Client,
}

impl DexscreenerProvider {
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(timeout, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(timeout: Duration, base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenPairsResponse {
    pairs: Option<Vec<Pair>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pair {
    base_token: Option<BaseToken>,
    price_usd: Option<String>,
    price_change: Option<WindowedChange>,
    volume: Option<WindowedVolume>,
    liquidity: Option<PairLiquidity>,
    market_cap: Option<f64>,
    fdv: Option<f64>,
    info: Option<PairInfo>,
}

#[derive(Debug, Deserialize)]
struct BaseToken {
    name: Option<String>,
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WindowedChange {
    h24: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WindowedVolume {
    h24: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PairLiquidity {
    usd: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PairInfo {
    websites: Option<Vec<LabeledUrl>>,
    socials: Option<Vec<Social>>,
}

#[derive(Debug, Deserialize)]
struct LabeledUrl {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Social {
    #[serde(rename = "type")]
    kind: Option<String>,
    url: Option<String>,
}

/// Sum a per-pair field over the entries where it is present. A pair that
/// does not report the field stays out of the sum instead of counting as
/// zero; if no pair reports it the total stays unknown.
fn sum_present(pairs: &[Pair], field: impl Fn(&Pair) -> Option<f64>) -> Option<f64> {
    let mut total = None;
    for pair in pairs {
        if let Some(value) = field(pair) {
            total = Some(total.unwrap_or(0.0) + value);
        }
    }
    total
}

fn record_from_pairs(pairs: &[Pair]) -> PartialRecord {
    let first = &pairs[0];

    let mut links = TokenLinks::default();
    if let Some(info) = &first.info {
        links.website = info
            .websites
            .as_ref()
            .and_then(|w| w.iter().find_map(|site| site.url.clone()));
        links.twitter = info.socials.as_ref().and_then(|socials| {
            socials
                .iter()
                .find(|s| s.kind.as_deref() == Some("twitter"))
                .and_then(|s| s.url.clone())
        });
    }

    PartialRecord {
        name: first.base_token.as_ref().and_then(|t| t.name.clone()),
        symbol: first.base_token.as_ref().and_then(|t| t.symbol.clone()),
        price_usd: first.price_usd.as_ref().and_then(|p| p.parse().ok()),
        price_change_24h_pct: first.price_change.as_ref().and_then(|c| c.h24),
        market_cap_usd: first.market_cap.or(first.fdv),
        volume_24h_usd: sum_present(pairs, |p| p.volume.as_ref().and_then(|v| v.h24)),
        liquidity_usd: sum_present(pairs, |p| p.liquidity.as_ref().and_then(|l| l.usd)),
        links,
        ..PartialRecord::default()
    }
}

#[async_trait]
impl TokenDataProvider for DexscreenerProvider {
    fn provider_name(&self) -> &str {
        "dexscreener"
    }

    async fn fetch(&self, query: &str) -> Result<Option<PartialRecord>, ProviderError> {
        let url = format!(
            "{}/latest/dex/tokens/{}",
            self.base_url,
            encode_identifier(query)
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let text = response.text().await?;
        let parsed: TokenPairsResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        match parsed.pairs {
            Some(pairs) if !pairs.is_empty() => Ok(Some(record_from_pairs(&pairs))),
            // 200 with a missing or empty pair list is a miss, not an error
            _ => Ok(None),
        }
    }
}
