use anyhow::Result;
use async_trait::async_trait;

use crate::entity::{Category, DashboardState};
use crate::utils::format_number;
use crate::view::screen::Screen;
use crate::view::token_table::render_token_table;

#[async_trait]
pub trait DashboardView: Send + Sync {
    async fn display_loading(&self) -> Result<()>;
    async fn display_dashboard(&self, state: &DashboardState) -> Result<()>;
}

pub struct TerminalDashboardView {
    screen: Screen,
}

impl TerminalDashboardView {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }
}

/// Summary card of a category, linking to its page.
pub fn render_category_card(category: &Category) -> String {
    format!(
        "  {}  ({} tokens)\n    Market Cap {}   Volume 24h {}   -> {}",
        category.name,
        category.token_count,
        format_number(Some(category.total_market_cap)),
        format_number(Some(category.total_volume_24h)),
        category.path()
    )
}

#[async_trait]
impl DashboardView for TerminalDashboardView {
    async fn display_loading(&self) -> Result<()> {
        self.screen.show("Loading dashboard...")
    }

    async fn display_dashboard(&self, state: &DashboardState) -> Result<()> {
        let mut text = String::from("PayAttention.sol | Solana meme coin tracker\n");
        if let Some(updated_at) = state.updated_at {
            text.push_str(&format!("Updated {}\n", updated_at.format("%H:%M:%S")));
        }

        text.push_str("\nCategories\n");
        if let Some(error) = &state.categories.error {
            text.push_str(&format!("  ! Categories unavailable: {}\n", error));
        }
        if state.categories.items.is_empty() {
            text.push_str("  No categories yet\n");
        }
        for category in &state.categories.items {
            text.push_str(&render_category_card(category));
            text.push('\n');
        }

        text.push_str("\nTop Tokens by Market Cap\n");
        if let Some(error) = &state.tokens.error {
            text.push_str(&format!("  ! Tokens unavailable: {}\n", error));
        }
        text.push_str(&render_token_table(&state.tokens.items, self.screen.styled()));

        self.screen.show(&text)
    }
}
