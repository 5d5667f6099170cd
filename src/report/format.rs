// Rendering conventions for the rich-text subset the delivery sink
// understands (bold and links, Telegram-flavored HTML). Unknown values
// render as a literal placeholder, never as an empty string or zero.

use num_format::{Locale, ToFormattedString};

pub const NA: &str = "N/A";

/// Escape a provider- or user-supplied string against the subset's reserved
/// characters so it cannot corrupt the rendered structure.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn bold(text: &str) -> String {
    format!("<b>{}</b>", text)
}

pub fn link(label: &str, url: &str) -> String {
    format!("<a href=\"{}\">{}</a>", escape(url), escape(label))
}

/// Large USD aggregates (market cap, volume, liquidity): integer-rounded
/// with thousands separators.
pub fn format_usd(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${}", (v.round() as i64).to_formatted_string(&Locale::en)),
        None => NA.to_string(),
    }
}

/// Token amounts (supply): integer-rounded with thousands separators.
pub fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) => (v.round() as i64).to_formatted_string(&Locale::en),
        None => NA.to_string(),
    }
}

/// Per-token price. Meme tokens trade far below one dollar, so precision
/// adapts to magnitude instead of integer rounding.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) if v.abs() < 0.000001 => format!("${:.2e}", v),
        Some(v) if v.abs() < 0.001 => format!("${:.8}", v),
        Some(v) if v.abs() < 1.0 => format!("${:.6}", v),
        Some(v) => format!("${:.4}", v),
        None => NA.to_string(),
    }
}

pub fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v),
        None => NA.to_string(),
    }
}

pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}x", v),
        None => NA.to_string(),
    }
}

pub fn truncate_address(address: &str) -> String {
    if address.len() > 12 {
        format!("{}…{}", &address[..6], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}
