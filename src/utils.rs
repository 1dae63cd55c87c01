/// Shown in place of a number the backend did not provide.
pub const PLACEHOLDER: &str = "-";

const EXPLORER_BASE_URL: &str = "https://dexscreener.com/solana";

// Display names of the categories the backend tracks
const CATEGORY_NAMES: [(&str, &str); 3] = [
    ("ai-meme-coins", "AI Agents"),
    ("pump-fun", "PumpFun"),
    ("solana-meme-coins", "Solana Memes"),
];

/// Formats a dollar amount scaled to the largest fitting unit.
///
/// `$1.20B` for billions (2 decimals), `$30.0M` for millions (1 decimal),
/// `$45K` for thousands (no decimals), `$12.34` below that. A missing or
/// non-finite value renders as [`PLACEHOLDER`]; zero is a real value.
pub fn format_number(value: Option<f64>) -> String {
    let n = match value {
        Some(n) if n.is_finite() => n,
        _ => return PLACEHOLDER.to_string(),
    };

    if n >= 1e9 {
        format!("${:.2}B", n / 1e9)
    } else if n >= 1e6 {
        format!("${:.1}M", n / 1e6)
    } else if n >= 1e3 {
        format!("${:.0}K", n / 1e3)
    } else {
        format!("${:.2}", n)
    }
}

/// Formats a percentage with one decimal and an explicit sign.
///
/// Non-negative values (zero included) get a leading `+`.
pub fn format_percent(value: Option<f64>) -> String {
    let n = match value {
        Some(n) if n.is_finite() => n,
        _ => return PLACEHOLDER.to_string(),
    };

    if n >= 0.0 {
        // abs() folds -0.0 into +0.0
        format!("+{:.1}%", n.abs())
    } else {
        format!("{:.1}%", n)
    }
}

/// DexScreener page for a Solana address.
pub fn explorer_url(address: &str) -> String {
    format!("{}/{}", EXPLORER_BASE_URL, address)
}

/// Human readable name of a category key. Unknown keys are shown as-is.
pub fn category_display_name(category_id: &str) -> String {
    CATEGORY_NAMES
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| category_id.to_string())
}

// Shorten address for display
pub fn shorten_address(address: &str) -> String {
    if address.chars().count() <= 10 {
        return address.to_string();
    }

    let chars: Vec<char> = address.chars().collect();
    let start: String = chars[..5].iter().collect();
    let end: String = chars[chars.len() - 5..].iter().collect();

    format!("{}...{}", start, end)
}
