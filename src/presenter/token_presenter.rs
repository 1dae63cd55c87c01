use anyhow::Result;
use async_trait::async_trait;
use log::error;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::entity::TokenDetailState;
use crate::interactor::TokenInteractor;
use crate::view::TokenView;

#[async_trait]
pub trait TokenPresenter: Send + Sync {
    async fn show_token(&self, token_id: &str) -> Result<()>;
    async fn state(&self) -> TokenDetailState;
}

pub struct TokenPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    state: Mutex<TokenDetailState>,
}

impl<I, V> TokenPresenterImpl<I, V>
where
    I: TokenInteractor,
    V: TokenView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>, token_id: &str) -> Self {
        Self {
            interactor,
            view,
            state: Mutex::new(TokenDetailState::new(token_id)),
        }
    }
}

#[async_trait]
impl<I, V> TokenPresenter for TokenPresenterImpl<I, V>
where
    I: TokenInteractor + Send + Sync,
    V: TokenView + Send + Sync,
{
    async fn show_token(&self, token_id: &str) -> Result<()> {
        {
            let mut state = self.state.lock().await;
            state.token_id = token_id.to_string();
            state.loading = true;
        }
        self.view.display_loading(token_id).await?;

        let result = self.interactor.get_token(token_id).await;

        let mut state = self.state.lock().await;
        state.loading = false;
        match result {
            Ok(token) => {
                state.error = None;
                state.token = Some(token.clone());
                drop(state);
                self.view.display_token(&token).await
            }
            Err(e) => {
                error!("Failed to load token {}: {}", token_id, e);
                state.error = Some(e.to_string());
                drop(state);
                self.view.display_error(token_id, e.to_string()).await
            }
        }
    }

    async fn state(&self) -> TokenDetailState {
        self.state.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactor::TokenInteractorImpl;
    use crate::tests::common::{token, StubApi};
    use crate::view::{Screen, TerminalTokenView};

    #[tokio::test]
    async fn shows_token_card_with_links() {
        let mut bonk = token("bonk", "Bonk", "BONK", 1.5e9);
        bonk.address = Some("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263".into());
        bonk.category = Some("solana-meme-coins".into());
        let api = Arc::new(StubApi::new(vec![], vec![bonk]));
        let (screen, capture) = Screen::capture();
        let presenter = TokenPresenterImpl::new(
            Arc::new(TokenInteractorImpl::new(api)),
            Arc::new(TerminalTokenView::new(screen)),
            "bonk",
        );

        presenter.show_token("bonk").await.unwrap();

        let output = capture.contents();
        assert!(output.contains("Bonk (BONK)"));
        assert!(output.contains("$1.50B"));
        assert!(output.contains("Solana Memes"));
        assert!(output.contains("https://dexscreener.com/solana/DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263"));
        assert!(!output.contains("Twitter"));
        assert!(presenter.state().await.token.is_some());
    }

    #[tokio::test]
    async fn unknown_token_shows_error() {
        let api = Arc::new(StubApi::new(vec![], vec![]));
        let (screen, capture) = Screen::capture();
        let presenter = TokenPresenterImpl::new(
            Arc::new(TokenInteractorImpl::new(api)),
            Arc::new(TerminalTokenView::new(screen)),
            "nope",
        );

        presenter.show_token("nope").await.unwrap();

        let state = presenter.state().await;
        assert!(!state.loading);
        assert!(state.token.is_none());
        assert_eq!(state.error.as_deref(), Some("Token not found: nope"));
        assert!(capture.contents().contains("Error loading nope"));
    }
}
