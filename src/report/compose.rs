use url::form_urlencoded;

use super::format::*;
use super::{ActionLink, Report};
use crate::metrics::Metrics;
use crate::types::TokenSnapshot;

fn encoded(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

fn explorer_url(address: &str) -> String {
    format!("https://solscan.io/token/{}", encoded(address))
}

fn chart_url(address: &str) -> String {
    format!("https://dexscreener.com/solana/{}", encoded(address))
}

fn swap_url(address: &str) -> String {
    format!("https://jup.ag/swap/SOL-{}", encoded(address))
}

/// Assemble the final report from the merged snapshot and derived metrics.
/// Two terminal shapes: the not-found variant for the empty sentinel, and
/// the full section sequence otherwise. Sections are independent; each is
/// included only when its backing data is present.
pub fn compose(snapshot: &TokenSnapshot, metrics: &Metrics) -> Report {
    if !snapshot.has_data() {
        return not_found(&snapshot.address);
    }

    let mut sections = Vec::new();
    sections.push(overview_section(snapshot));
    if !snapshot.top_holders.is_empty() {
        sections.push(holders_section(metrics));
    }
    sections.push(liquidity_section(snapshot, metrics));
    sections.push(market_activity_section(snapshot, metrics));
    if let Some(section) = links_section(snapshot) {
        sections.push(section);
    }

    Report {
        sections,
        action_links: vec![
            ActionLink {
                label: "Explorer".to_string(),
                url: explorer_url(&snapshot.address),
            },
            ActionLink {
                label: "Chart".to_string(),
                url: chart_url(&snapshot.address),
            },
            ActionLink {
                label: "Swap".to_string(),
                url: swap_url(&snapshot.address),
            },
        ],
    }
}

fn not_found(query: &str) -> Report {
    Report {
        sections: vec![format!(
            "{}\nNo provider returned a record for {}.",
            bold("No data found"),
            escape(query)
        )],
        action_links: vec![ActionLink {
            label: "Explorer".to_string(),
            url: explorer_url(query),
        }],
    }
}

/// Short report for tickers deliberately outside this bot's coverage.
pub fn not_supported(symbol: &str) -> Report {
    Report {
        sections: vec![format!(
            "{}\n{} is a major token and is not tracked here.",
            bold("Not tracked"),
            escape(symbol)
        )],
        action_links: Vec::new(),
    }
}

fn title(snapshot: &TokenSnapshot) -> String {
    match (&snapshot.name, &snapshot.symbol) {
        (Some(name), Some(symbol)) => format!("{} ({})", escape(name), escape(symbol)),
        (Some(name), None) => escape(name),
        (None, Some(symbol)) => escape(symbol),
        (None, None) => escape(&truncate_address(&snapshot.address)),
    }
}

fn overview_section(snapshot: &TokenSnapshot) -> String {
    let authority = match snapshot.token_authority_present {
        Some(true) => "active (not renounced)".to_string(),
        Some(false) => "renounced".to_string(),
        None => NA.to_string(),
    };

    format!(
        "{title}\nAddress: {address}\nPrice: {price}\nTotal supply: {supply}\nMarket cap: {cap}\nToken authority: {authority}",
        title = bold(&title(snapshot)),
        address = link(&truncate_address(&snapshot.address), &explorer_url(&snapshot.address)),
        price = format_price(snapshot.price_usd),
        supply = format_amount(snapshot.total_supply),
        cap = format_usd(snapshot.market_cap_usd),
        authority = authority,
    )
}

fn holders_section(metrics: &Metrics) -> String {
    let mut lines = vec![bold("Top holders")];
    for (rank, share) in metrics.holders.shares.iter().enumerate() {
        lines.push(format!(
            "{}. {}: {}",
            rank + 1,
            escape(&truncate_address(&share.address)),
            format_pct(share.percent_of_supply),
        ));
    }
    lines.push(format!(
        "Top 5 hold: {}",
        format_pct(metrics.holders.top5_pct)
    ));
    if metrics.holders.shares.len() > 5 {
        lines.push(format!(
            "Top 10 hold: {}",
            format_pct(metrics.holders.top10_pct)
        ));
    }
    lines.join("\n")
}

fn liquidity_section(snapshot: &TokenSnapshot, metrics: &Metrics) -> String {
    format!(
        "{}\nPooled: {}\nLiquidity / market cap: {}",
        bold("Liquidity"),
        format_usd(snapshot.liquidity_usd),
        format_pct(metrics.liquidity_to_market_cap_pct),
    )
}

fn market_activity_section(snapshot: &TokenSnapshot, metrics: &Metrics) -> String {
    format!(
        "{}\nVolume: {}\nVolume / market cap: {}\nPrice change: {}",
        bold("Market activity (24h)"),
        format_usd(snapshot.volume_24h_usd),
        format_ratio(metrics.volume_to_market_cap),
        format_pct(metrics.price_change_24h_pct),
    )
}

fn links_section(snapshot: &TokenSnapshot) -> Option<String> {
    let links = &snapshot.links;
    if links.is_empty() {
        return None;
    }

    let mut lines = vec![bold("Links")];
    if let Some(website) = &links.website {
        lines.push(link("Website", website));
    }
    if let Some(twitter) = &links.twitter {
        lines.push(link("Twitter", twitter));
    }
    if let Some(id) = &links.coingecko_id {
        lines.push(link(
            "CoinGecko",
            &format!("https://www.coingecko.com/en/coins/{}", encoded(id)),
        ));
    }
    if let Some(tag) = &links.tag {
        lines.push(format!("Tag: {}", escape(tag)));
    }
    Some(lines.join("\n"))
}
