use crate::types::TokenSnapshot;

/// 24h price change as a percentage of the prior price.
///
/// A provider-supplied percentage is used as-is. Otherwise the prior price
/// is reconstructed from the absolute change (`price - change`) and the
/// percentage is `change / prior * 100`. A zero prior price or a missing
/// input yields unknown; division by zero never raises.
pub fn price_change_pct(snapshot: &TokenSnapshot) -> Option<f64> {
    if let Some(pct) = snapshot.price_change_24h_pct {
        return Some(pct);
    }

    let price = snapshot.price_usd?;
    let change = snapshot.price_change_24h_usd?;
    let prior = price - change;
    if prior == 0.0 {
        return None;
    }

    Some(change / prior * 100.0)
}
