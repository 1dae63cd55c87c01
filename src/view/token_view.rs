use anyhow::Result;
use async_trait::async_trait;
use crossterm::style::Stylize;

use crate::entity::Token;
use crate::utils::{
    category_display_name, format_number, format_percent, shorten_address,
};
use crate::view::screen::Screen;

#[async_trait]
pub trait TokenView: Send + Sync {
    async fn display_loading(&self, token_id: &str) -> Result<()>;
    async fn display_token(&self, token: &Token) -> Result<()>;
    async fn display_error(&self, token_id: &str, error_message: String) -> Result<()>;
}

pub struct TerminalTokenView {
    screen: Screen,
}

impl TerminalTokenView {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }
}

#[async_trait]
impl TokenView for TerminalTokenView {
    async fn display_loading(&self, token_id: &str) -> Result<()> {
        self.screen.show(&format!("Loading {}...", token_id))
    }

    async fn display_token(&self, token: &Token) -> Result<()> {
        let change = format_percent(token.price_change_24h);
        let change = match (
            self.screen.styled(),
            token.price_change_24h.map(|change| change >= 0.0),
        ) {
            (true, Some(true)) => change.green().to_string(),
            (true, Some(false)) => change.red().to_string(),
            _ => change,
        };

        let mut lines = vec![
            format!("{} ({})", token.name, token.symbol),
            format!("  Price       {}", format_number(token.price)),
            format!("  Market Cap  {}", format_number(token.market_cap)),
            format!("  Volume 24h  {}", format_number(token.volume_24h)),
            format!("  24h Change  {}", change),
        ];

        if let Some(category) = &token.category {
            lines.push(format!(
                "  Category    {} -> /category/{}",
                category_display_name(category),
                category
            ));
        }
        if let Some(address) = &token.address {
            lines.push(format!("  Address     {}", shorten_address(address)));
        }
        if let Some(image) = &token.image {
            lines.push(format!("  Image       {}", image));
        }

        let links = [
            ("Twitter", token.twitter.clone()),
            ("Telegram", token.telegram.clone()),
            ("Website", token.website.clone()),
            ("Chart", token.explorer_url()),
        ];
        for (label, url) in links {
            if let Some(url) = url {
                lines.push(format!("  {:<10}  {}", label, url));
            }
        }

        self.screen.show(&lines.join("\n"))
    }

    async fn display_error(&self, token_id: &str, error_message: String) -> Result<()> {
        self.screen
            .show(&format!("Error loading {}: {}", token_id, error_message))
    }
}
