use crossterm::style::Stylize;

use crate::entity::Token;
use crate::utils::{format_number, format_percent};

/// Shown instead of the table when there is nothing to list.
pub const NO_DATA_MESSAGE: &str = "No tokens found";

const NAME_WIDTH: usize = 28;

// Leads the identity of tokens that have a logo
const IMAGE_MARKER: char = '◆';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Twitter,
    Telegram,
    Website,
    Explorer,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Twitter => "X",
            Self::Telegram => "TG",
            Self::Website => "WEB",
            Self::Explorer => "DEX",
        }
    }
}

/// Display values of one table row, derived from a token and its position.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRow {
    pub rank: usize,
    pub image: Option<String>,
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub market_cap: String,
    pub volume: String,
    pub change: String,
    /// Sign of the change, `None` when the backend had no value.
    pub change_positive: Option<bool>,
    pub links: Vec<(LinkKind, String)>,
}

impl TokenRow {
    fn new(rank: usize, token: &Token) -> Self {
        let mut links = Vec::new();
        if let Some(url) = &token.twitter {
            links.push((LinkKind::Twitter, url.clone()));
        }
        if let Some(url) = &token.telegram {
            links.push((LinkKind::Telegram, url.clone()));
        }
        if let Some(url) = &token.website {
            links.push((LinkKind::Website, url.clone()));
        }
        if let Some(url) = token.explorer_url() {
            links.push((LinkKind::Explorer, url));
        }

        Self {
            rank,
            image: token.image.clone(),
            name: token.name.clone(),
            symbol: token.symbol.clone(),
            price: format_number(token.price),
            market_cap: format_number(token.market_cap),
            volume: format_number(token.volume_24h),
            change: format_percent(token.price_change_24h),
            change_positive: token.price_change_24h.map(|change| change >= 0.0),
            links,
        }
    }
}

/// Rows in backend order, ranked from 1.
pub fn token_rows(tokens: &[Token]) -> Vec<TokenRow> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| TokenRow::new(index + 1, token))
        .collect()
}

pub fn render_token_table(tokens: &[Token], styled: bool) -> String {
    let rows = token_rows(tokens);
    if rows.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let mut lines = vec![format!(
        "{:>4}  {:<width$}  {:>14}  {:>10}  {:>10}  {:>8}  {}",
        "#",
        "Token",
        "Price",
        "MCap",
        "Vol 24h",
        "24h",
        "Links",
        width = NAME_WIDTH
    )];

    for row in rows {
        let change = format!("{:>8}", row.change);
        let change = match (styled, row.change_positive) {
            (true, Some(true)) => change.green().to_string(),
            (true, Some(false)) => change.red().to_string(),
            _ => change,
        };
        let labels: Vec<&str> = row.links.iter().map(|(kind, _)| kind.label()).collect();

        lines.push(format!(
            "{:>4}  {:<width$}  {:>14}  {:>10}  {:>10}  {}  {}",
            row.rank,
            identity(row.image.is_some(), &row.name, &row.symbol),
            row.price,
            row.market_cap,
            row.volume,
            change,
            labels.join(" "),
            width = NAME_WIDTH
        ));

        let mut urls: Vec<String> = Vec::new();
        if let Some(image) = &row.image {
            urls.push(format!("{} {}", IMAGE_MARKER, image));
        }
        urls.extend(row.links.iter().map(|(_, url)| url.clone()));
        if !urls.is_empty() {
            lines.push(format!("{:>6}{}", "", urls.join("  ")));
        }
    }

    lines.join("\n")
}

// "◆ Name SYMBOL" (marker only with a logo), cut to the column width
fn identity(has_image: bool, name: &str, symbol: &str) -> String {
    let text = if has_image {
        format!("{} {} {}", IMAGE_MARKER, name, symbol)
    } else {
        format!("{} {}", name, symbol)
    };
    if text.chars().count() <= NAME_WIDTH {
        return text;
    }
    let cut: String = text.chars().take(NAME_WIDTH - 1).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(id: &str, change: f64) -> Token {
        Token {
            id: id.to_string(),
            name: format!("{} coin", id),
            symbol: id.to_uppercase(),
            image: None,
            price: Some(0.5),
            market_cap: Some(2.5e8),
            volume_24h: Some(4.2e6),
            price_change_24h: Some(change),
            twitter: None,
            telegram: None,
            website: None,
            address: None,
            category: None,
        }
    }

    #[test]
    fn empty_sequence_renders_only_the_message() {
        assert!(token_rows(&[]).is_empty());
        assert_eq!(render_token_table(&[], false), NO_DATA_MESSAGE);
        assert_eq!(render_token_table(&[], true), NO_DATA_MESSAGE);
    }

    #[test]
    fn rank_follows_sequence_position() {
        let rows = token_rows(&[token("b", 1.0), token("a", -1.0)]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].symbol, "B");
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].symbol, "A");
    }

    #[test]
    fn row_values_are_formatted() {
        let rows = token_rows(&[token("wif", -2.26)]);
        let row = &rows[0];
        assert_eq!(row.price, "$0.50");
        assert_eq!(row.market_cap, "$250.0M");
        assert_eq!(row.volume, "$4.2M");
        assert_eq!(row.change, "-2.3%");
        assert_eq!(row.change_positive, Some(false));
    }

    #[test]
    fn zero_change_counts_as_positive() {
        let rows = token_rows(&[token("flat", 0.0)]);
        assert_eq!(rows[0].change, "+0.0%");
        assert_eq!(rows[0].change_positive, Some(true));
    }

    #[test]
    fn links_render_only_when_present() {
        let mut linked = token("bonk", 3.0);
        linked.twitter = Some("https://twitter.com/bonk_inu".into());
        linked.address = Some("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263".into());

        let rows = token_rows(&[linked, token("plain", 3.0)]);
        let kinds: Vec<LinkKind> = rows[0].links.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, vec![LinkKind::Twitter, LinkKind::Explorer]);
        assert_eq!(
            rows[0].links[1].1,
            "https://dexscreener.com/solana/DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263"
        );
        assert!(rows[1].links.is_empty());

        let table = render_token_table(&[token("plain", 3.0)], false);
        assert!(!table.contains("dexscreener"));
        assert!(!table.contains("twitter"));
    }

    #[test]
    fn styled_table_colors_change_by_sign() {
        let up = render_token_table(&[token("up", 5.0)], true);
        let down = render_token_table(&[token("down", -5.0)], true);
        assert!(up.contains("+5.0%"));
        assert!(down.contains("-5.0%"));
        assert!(up.contains(&format!("{:>8}", "+5.0%").green().to_string()));
        assert!(down.contains(&format!("{:>8}", "-5.0%").red().to_string()));
        assert!(!render_token_table(&[token("up", 5.0)], false).contains('\u{1b}'));
    }

    #[test]
    fn missing_amounts_render_placeholder() {
        let mut fresh = token("newcoin", 0.0);
        fresh.market_cap = None;
        fresh.price_change_24h = None;

        let rows = token_rows(&[fresh.clone()]);
        assert_eq!(rows[0].market_cap, "-");
        assert_eq!(rows[0].change, "-");
        assert_eq!(rows[0].change_positive, None);
        assert_eq!(rows[0].price, "$0.50");

        let table = render_token_table(&[fresh], true);
        let row = table.lines().nth(1).unwrap();
        assert!(row.contains("  -  "));
        assert!(!row.contains('\u{1b}'));
    }

    #[test]
    fn image_is_shown_only_when_present() {
        let mut logo = token("bonk", 1.0);
        logo.image = Some("https://img.example/bonk.png".into());

        let rows = token_rows(&[logo.clone(), token("plain", 1.0)]);
        assert_eq!(rows[0].image.as_deref(), Some("https://img.example/bonk.png"));
        assert_eq!(rows[1].image, None);

        let with_image = render_token_table(&[logo], false);
        assert!(with_image.contains("◆ bonk coin BONK"));
        assert!(with_image.contains("◆ https://img.example/bonk.png"));

        let without_image = render_token_table(&[token("plain", 1.0)], false);
        assert!(!without_image.contains('◆'));
        assert_eq!(without_image.lines().count(), 2);
    }

    #[test]
    fn long_names_are_cut() {
        assert_eq!(identity(false, "Bonk", "BONK"), "Bonk BONK");
        assert_eq!(identity(true, "Bonk", "BONK"), "◆ Bonk BONK");
        let long = identity(true, "A very long meme coin name indeed", "LONG");
        assert_eq!(long.chars().count(), NAME_WIDTH);
        assert!(long.ends_with('…'));
    }
}
