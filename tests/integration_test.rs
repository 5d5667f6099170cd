use std::sync::Arc;
use std::time::Duration;

use token_report_aggregator::providers::{MockProvider, ProviderError};
use token_report_aggregator::types::{HolderBalance, PartialRecord, TokenLinks};
use token_report_aggregator::{describe, QueryStatus, TokenDataProvider};

const MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

fn stack(mocks: Vec<MockProvider>) -> Vec<Arc<dyn TokenDataProvider>> {
    mocks
        .into_iter()
        .map(|m| Arc::new(m) as Arc<dyn TokenDataProvider>)
        .collect()
}

fn holder_provider() -> MockProvider {
    // the metadata/holder source: raw supply plus the holder list
    MockProvider::new("meta").with_record(
        MINT,
        PartialRecord {
            name: Some("Example Coin".to_string()),
            symbol: Some("EXM".to_string()),
            decimals: Some(0),
            supply_raw: Some(100),
            token_authority_present: Some(false),
            top_holders: vec![
                HolderBalance {
                    address: "holderA_aaaaaaaaaaaaaaaa".to_string(),
                    amount_raw: 50,
                },
                HolderBalance {
                    address: "holderB_bbbbbbbbbbbbbbbb".to_string(),
                    amount_raw: 30,
                },
                HolderBalance {
                    address: "holderC_cccccccccccccccc".to_string(),
                    amount_raw: 20,
                },
            ],
            ..PartialRecord::default()
        },
    )
}

fn market_provider() -> MockProvider {
    // the pair-price source: price, absolute change, market aggregates
    MockProvider::new("market").with_record(
        MINT,
        PartialRecord {
            price_usd: Some(1.00),
            price_change_24h_usd: Some(0.10),
            volume_24h_usd: Some(500.0),
            liquidity_usd: Some(25.0),
            links: TokenLinks {
                website: Some("https://example.test".to_string()),
                ..TokenLinks::default()
            },
            ..PartialRecord::default()
        },
    )
}

#[tokio::test]
async fn test_full_report_happy_path() {
    let providers = stack(vec![holder_provider(), market_provider()]);

    let response = describe(MINT, &providers, Duration::from_secs(1)).await;

    assert_eq!(response.status, QueryStatus::Found);
    let text = &response.report_text;

    // overview from the first provider
    assert!(text.contains("Example Coin (EXM)"));
    assert!(text.contains("Token authority: renounced"));

    // holder concentration: 50/30/20 of a supply of 100
    assert!(text.contains("50.00%"));
    assert!(text.contains("30.00%"));
    assert!(text.contains("20.00%"));
    assert!(text.contains("Top 5 hold: 100.00%"));

    // derived market cap: supply 100 * price 1.00
    assert!(text.contains("Market cap: $100"));

    // price change reconstructed from the absolute move: 0.10/(1.00-0.10)
    assert!(text.contains("Price change: 11.11%"));

    // volume 500 over market cap 100
    assert!(text.contains("Volume / market cap: 5.00x"));

    // liquidity 25 over market cap 100
    assert!(text.contains("Liquidity / market cap: 25.00%"));

    assert!(text.contains("https://example.test"));
    assert_eq!(response.action_links.len(), 3);
}

#[tokio::test]
async fn test_token_not_found_renders_not_found_variant() {
    let providers = stack(vec![
        MockProvider::new("meta"),
        MockProvider::new("market"),
        MockProvider::new("alt"),
    ]);

    let response = describe("TOKEN_NOT_FOUND", &providers, Duration::from_secs(1)).await;

    assert_eq!(response.status, QueryStatus::NotFound);
    assert!(response.report_text.contains("No data found"));
    // exactly one link back to the explorer, no numeric sections
    assert_eq!(response.action_links.len(), 1);
    assert!(!response.report_text.contains("Market activity"));
    assert!(!response.report_text.contains('%'));
}

#[tokio::test]
async fn test_zero_guard_when_no_provider_knows_market_cap() {
    let market_only = MockProvider::new("market").with_record(
        MINT,
        PartialRecord {
            symbol: Some("EXM".to_string()),
            volume_24h_usd: Some(500.0),
            ..PartialRecord::default()
        },
    );

    let response = describe(MINT, &stack(vec![market_only]), Duration::from_secs(1)).await;

    assert_eq!(response.status, QueryStatus::Found);
    assert!(response.report_text.contains("Market cap: N/A"));
    // the zero-guard denominator of 1 yields a number, not a placeholder
    assert!(response.report_text.contains("Volume / market cap: 500.00x"));
}

#[tokio::test]
async fn test_one_failed_provider_degrades_not_aborts() {
    let failing = MockProvider::new("meta").with_failure(MINT, ProviderError::Status(500));
    let slow = MockProvider::new("alt")
        .with_record(
            MINT,
            PartialRecord {
                market_cap_usd: Some(1_000_000.0),
                ..PartialRecord::default()
            },
        )
        .with_latency(Duration::from_millis(300));

    let providers = stack(vec![failing, market_provider(), slow]);

    let response = describe(MINT, &providers, Duration::from_millis(50)).await;

    // the failed and timed-out providers contribute nothing; the healthy
    // one still produces a found report
    assert_eq!(response.status, QueryStatus::Found);
    assert!(response.report_text.contains("Volume: $500"));
    // the slow provider's market cap never landed
    assert!(response.report_text.contains("Market cap: N/A"));
}

#[tokio::test]
async fn test_merge_priority_is_provider_order() {
    let p1 = MockProvider::new("first").with_record(
        MINT,
        PartialRecord {
            price_usd: Some(5.0),
            ..PartialRecord::default()
        },
    );
    let p2 = MockProvider::new("second").with_record(
        MINT,
        PartialRecord {
            price_usd: Some(9.0),
            total_supply: Some(100.0),
            symbol: Some("EXM".to_string()),
            ..PartialRecord::default()
        },
    );

    let response = describe(MINT, &stack(vec![p1, p2]), Duration::from_secs(1)).await;

    // price 5 from the first provider wins; supply 100 fills from the second
    assert!(response.report_text.contains("Price: $5.0000"));
    assert!(response.report_text.contains("Total supply: 100"));
}
