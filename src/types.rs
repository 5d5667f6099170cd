// src/types.rs

use serde::{Deserialize, Serialize};

/// External links attached to a token, each independently optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TokenLinks {
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub tag: Option<String>,
    pub coingecko_id: Option<String>,
}

impl TokenLinks {
    pub fn is_empty(&self) -> bool {
        self.website.is_none()
            && self.twitter.is_none()
            && self.tag.is_none()
            && self.coingecko_id.is_none()
    }
}

/// One holder entry as reported by a provider. `amount_raw` is in the
/// token's raw integer unit, before decimal scaling.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HolderBalance {
    pub address: String,
    pub amount_raw: u128,
}

/// What a single provider managed to fill in for one query. Providers vary
/// in how completely they populate this, never in the shape itself.
/// `None` means the provider did not report the field, which is distinct
/// from a reported zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartialRecord {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub decimals: Option<u8>,
    pub price_usd: Option<f64>,
    /// Raw integer supply, needs scaling by 10^decimals.
    pub supply_raw: Option<u128>,
    /// Supply already expressed in human units.
    pub total_supply: Option<f64>,
    pub volume_24h_usd: Option<f64>,
    pub liquidity_usd: Option<f64>,
    pub market_cap_usd: Option<f64>,
    /// Absolute 24h price change in USD.
    pub price_change_24h_usd: Option<f64>,
    /// 24h price change already expressed as a percentage.
    pub price_change_24h_pct: Option<f64>,
    pub token_authority_present: Option<bool>,
    pub links: TokenLinks,
    pub top_holders: Vec<HolderBalance>,
}

impl PartialRecord {
    pub fn is_empty(&self) -> bool {
        self.symbol.is_none()
            && self.name.is_none()
            && self.decimals.is_none()
            && self.price_usd.is_none()
            && self.supply_raw.is_none()
            && self.total_supply.is_none()
            && self.volume_24h_usd.is_none()
            && self.liquidity_usd.is_none()
            && self.market_cap_usd.is_none()
            && self.price_change_24h_usd.is_none()
            && self.price_change_24h_pct.is_none()
            && self.token_authority_present.is_none()
            && self.links.is_empty()
            && self.top_holders.is_empty()
    }
}

/// The canonical merged record for one query. Created fresh per query,
/// consumed once by the metrics and report layers, then discarded.
#[derive(Clone, Debug, Serialize)]
pub struct TokenSnapshot {
    pub address: String,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub decimals: u8,
    pub price_usd: Option<f64>,
    /// Invariant: always in human units (raw supply / 10^decimals).
    pub total_supply: Option<f64>,
    pub volume_24h_usd: Option<f64>,
    pub liquidity_usd: Option<f64>,
    pub market_cap_usd: Option<f64>,
    pub price_change_24h_usd: Option<f64>,
    pub price_change_24h_pct: Option<f64>,
    /// True means mint/freeze authority has not been renounced.
    pub token_authority_present: Option<bool>,
    pub links: TokenLinks,
    pub top_holders: Vec<HolderBalance>,
}

impl TokenSnapshot {
    /// The sentinel "no provider had anything" snapshot.
    pub fn empty(address: &str) -> Self {
        Self {
            address: address.to_string(),
            symbol: None,
            name: None,
            decimals: 0,
            price_usd: None,
            total_supply: None,
            volume_24h_usd: None,
            liquidity_usd: None,
            market_cap_usd: None,
            price_change_24h_usd: None,
            price_change_24h_pct: None,
            token_authority_present: None,
            links: TokenLinks::default(),
            top_holders: Vec::new(),
        }
    }

    /// False only for the empty sentinel, the query's single not-found state.
    pub fn has_data(&self) -> bool {
        self.symbol.is_some()
            || self.name.is_some()
            || self.price_usd.is_some()
            || self.total_supply.is_some()
            || self.volume_24h_usd.is_some()
            || self.liquidity_usd.is_some()
            || self.market_cap_usd.is_some()
            || self.price_change_24h_usd.is_some()
            || self.price_change_24h_pct.is_some()
            || self.token_authority_present.is_some()
            || !self.links.is_empty()
            || !self.top_holders.is_empty()
    }
}
