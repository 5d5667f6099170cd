// src/metrics/mod.rs
//
// Derived ratios over the canonical snapshot. Pure functions, no I/O; a
// zero, missing or degenerate input degrades that one metric to unknown
// instead of raising. Rounding happens at render time only.

pub mod price_change;
pub mod market_cap_ratios;
pub mod holder_concentration;

pub use price_change::price_change_pct;
pub use market_cap_ratios::{liquidity_to_market_cap_pct, volume_to_market_cap};
pub use holder_concentration::{holder_concentration, HolderConcentration, HolderShare};

use crate::types::TokenSnapshot;

#[derive(Clone, Debug)]
pub struct Metrics {
    pub price_change_24h_pct: Option<f64>,
    pub volume_to_market_cap: Option<f64>,
    pub liquidity_to_market_cap_pct: Option<f64>,
    pub holders: HolderConcentration,
}

pub fn compute(snapshot: &TokenSnapshot) -> Metrics {
    Metrics {
        price_change_24h_pct: price_change_pct(snapshot),
        volume_to_market_cap: volume_to_market_cap(snapshot),
        liquidity_to_market_cap_pct: liquidity_to_market_cap_pct(snapshot),
        holders: holder_concentration(snapshot),
    }
}
