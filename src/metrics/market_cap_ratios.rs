use crate::types::TokenSnapshot;

/// Zero-guard convention for the two market-cap ratios: an unknown or zero
/// market cap substitutes 1 as the denominator, so an active token with no
/// known cap renders a number instead of unknown. The result is not a
/// mathematically meaningful ratio in that case, by convention.
fn guarded_market_cap(snapshot: &TokenSnapshot) -> f64 {
    match snapshot.market_cap_usd {
        Some(mc) if mc > 0.0 => mc,
        _ => 1.0,
    }
}

/// 24h volume divided by market cap, rendered as a multiple.
pub fn volume_to_market_cap(snapshot: &TokenSnapshot) -> Option<f64> {
    let volume = snapshot.volume_24h_usd?;
    Some(volume / guarded_market_cap(snapshot))
}

/// Liquidity as a percentage of market cap.
pub fn liquidity_to_market_cap_pct(snapshot: &TokenSnapshot) -> Option<f64> {
    let liquidity = snapshot.liquidity_usd?;
    Some(liquidity / guarded_market_cap(snapshot) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> TokenSnapshot {
        TokenSnapshot::empty("addr")
    }

    #[test]
    fn test_volume_ratio_with_known_cap() {
        let mut s = snapshot();
        s.volume_24h_usd = Some(500.0);
        s.market_cap_usd = Some(10_000.0);

        assert_eq!(volume_to_market_cap(&s), Some(0.05));
    }

    #[test]
    fn test_unknown_cap_substitutes_one() {
        let mut s = snapshot();
        s.volume_24h_usd = Some(500.0);

        assert_eq!(volume_to_market_cap(&s), Some(500.0));
    }

    #[test]
    fn test_zero_cap_substitutes_one() {
        let mut s = snapshot();
        s.volume_24h_usd = Some(500.0);
        s.market_cap_usd = Some(0.0);

        assert_eq!(volume_to_market_cap(&s), Some(500.0));
    }

    #[test]
    fn test_unknown_volume_is_unknown() {
        let mut s = snapshot();
        s.market_cap_usd = Some(10_000.0);

        assert_eq!(volume_to_market_cap(&s), None);
    }

    #[test]
    fn test_liquidity_percentage() {
        let mut s = snapshot();
        s.liquidity_usd = Some(250.0);
        s.market_cap_usd = Some(10_000.0);

        assert_eq!(liquidity_to_market_cap_pct(&s), Some(2.5));
    }

    #[test]
    fn test_liquidity_percentage_zero_guard() {
        let mut s = snapshot();
        s.liquidity_usd = Some(250.0);

        assert_eq!(liquidity_to_market_cap_pct(&s), Some(25_000.0));
    }

    #[test]
    fn test_unknown_liquidity_is_unknown() {
        let mut s = snapshot();
        s.market_cap_usd = Some(10_000.0);

        assert_eq!(liquidity_to_market_cap_pct(&s), None);
    }
}
