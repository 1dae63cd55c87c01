use anyhow::Result;
use async_trait::async_trait;

use crate::entity::{CategoryState, SortKey};
use crate::utils::category_display_name;
use crate::view::screen::Screen;
use crate::view::token_table::render_token_table;

#[async_trait]
pub trait CategoryView: Send + Sync {
    async fn display_loading(&self, category_id: &str, sort: SortKey) -> Result<()>;
    async fn display_category(&self, state: &CategoryState) -> Result<()>;
}

pub struct TerminalCategoryView {
    screen: Screen,
}

impl TerminalCategoryView {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }
}

/// The three sort buttons, the selected one in brackets.
pub fn render_sort_control(selected: SortKey) -> String {
    let buttons: Vec<String> = SortKey::ALL
        .iter()
        .map(|key| {
            if *key == selected {
                format!("[{}]", key.label())
            } else {
                format!(" {} ", key.label())
            }
        })
        .collect();
    format!("Sort: {}", buttons.join(" "))
}

#[async_trait]
impl CategoryView for TerminalCategoryView {
    async fn display_loading(&self, category_id: &str, sort: SortKey) -> Result<()> {
        self.screen.show(&format!(
            "Loading {} by {}...",
            category_display_name(category_id),
            sort.label()
        ))
    }

    async fn display_category(&self, state: &CategoryState) -> Result<()> {
        let mut text = format!(
            "<- /   {}\n{}\n",
            category_display_name(&state.category_id),
            render_sort_control(state.sort)
        );

        if let Some(error) = &state.tokens.error {
            text.push_str(&format!("! Could not refresh tokens: {}\n", error));
        }
        text.push('\n');
        text.push_str(&render_token_table(&state.tokens.items, self.screen.styled()));

        if !state.tokens.items.is_empty() {
            text.push_str(&format!(
                "\n\n{} tokens shown. Type `more` for the next page.",
                state.tokens.items.len()
            ));
        }

        self.screen.show(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_control_marks_selection() {
        assert_eq!(
            render_sort_control(SortKey::Volume24h),
            "Sort:  Market Cap  [Volume 24h]  24h Change "
        );
    }

    #[tokio::test]
    async fn unknown_category_uses_raw_key() {
        let (screen, capture) = Screen::capture();
        let view = TerminalCategoryView::new(screen);

        let mut state = CategoryState::new("dog-coins");
        state.loading = false;
        view.display_category(&state).await.unwrap();

        let output = capture.contents();
        assert!(output.contains("dog-coins"));
        assert!(output.contains("No tokens found"));
        assert!(!output.contains("tokens shown"));
    }
}
