// src/normalize.rs
//
// Folds the per-provider partial records into the one canonical snapshot.
// Merge order is provider-priority order, declared once where the provider
// stack is wired: a later record fills a gap left by an earlier one but
// never overwrites a field that is already set.

use crate::types::{PartialRecord, TokenSnapshot};

/// Scale a raw integer supply into human units. Absent decimals are treated
/// as 0 (no scaling); a wrong decimals value from a provider silently skews
/// every ratio derived from supply, which is a known precision risk.
pub fn scale_supply(raw: u128, decimals: u8) -> f64 {
    raw as f64 / 10f64.powi(decimals as i32)
}

fn fill<T: Clone>(slot: &mut Option<T>, candidate: &Option<T>) {
    if slot.is_none() {
        *slot = candidate.clone();
    }
}

pub fn merge(address: &str, partials: &[PartialRecord]) -> TokenSnapshot {
    let mut snapshot = TokenSnapshot::empty(address);

    if partials.iter().all(|p| p.is_empty()) {
        // the single defined not-found state
        return snapshot;
    }

    let mut decimals: Option<u8> = None;
    for partial in partials {
        fill(&mut snapshot.symbol, &partial.symbol);
        fill(&mut snapshot.name, &partial.name);
        fill(&mut decimals, &partial.decimals);
        fill(&mut snapshot.price_usd, &partial.price_usd);
        fill(&mut snapshot.volume_24h_usd, &partial.volume_24h_usd);
        fill(&mut snapshot.liquidity_usd, &partial.liquidity_usd);
        fill(&mut snapshot.market_cap_usd, &partial.market_cap_usd);
        fill(&mut snapshot.price_change_24h_usd, &partial.price_change_24h_usd);
        fill(&mut snapshot.price_change_24h_pct, &partial.price_change_24h_pct);
        fill(
            &mut snapshot.token_authority_present,
            &partial.token_authority_present,
        );
        fill(&mut snapshot.links.website, &partial.links.website);
        fill(&mut snapshot.links.twitter, &partial.links.twitter);
        fill(&mut snapshot.links.tag, &partial.links.tag);
        fill(&mut snapshot.links.coingecko_id, &partial.links.coingecko_id);
        if snapshot.top_holders.is_empty() && !partial.top_holders.is_empty() {
            snapshot.top_holders = partial.top_holders.clone();
        }
    }
    snapshot.decimals = decimals.unwrap_or(0);

    // Supply: the highest-priority provider reporting it wins, whether it
    // reports raw integer units or already-scaled human units.
    for partial in partials {
        if snapshot.total_supply.is_some() {
            break;
        }
        if let Some(raw) = partial.supply_raw {
            snapshot.total_supply = Some(scale_supply(raw, snapshot.decimals));
        } else if let Some(human) = partial.total_supply {
            snapshot.total_supply = Some(human);
        }
    }

    // Provider-supplied market cap is authoritative; the derived product is
    // only a fallback.
    if snapshot.market_cap_usd.is_none() {
        if let (Some(supply), Some(price)) = (snapshot.total_supply, snapshot.price_usd) {
            snapshot.market_cap_usd = Some(supply * price);
        }
    }

    snapshot
}
