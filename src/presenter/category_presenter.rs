use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error, info};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::entity::{CategoryState, SortKey};
use crate::interactor::CategoryInteractor;
use crate::view::CategoryView;

#[async_trait]
pub trait CategoryPresenter: Send + Sync {
    /// Binds the page to a category id and fetches its tokens.
    async fn show_category(&self, category_id: &str) -> Result<()>;
    /// Changes the sort key. Selecting the current key is a no-op.
    async fn select_sort(&self, sort: SortKey) -> Result<()>;
    /// Fetches the next page and appends it to the shown rows.
    async fn load_more(&self) -> Result<()>;
    async fn refresh(&self) -> Result<()>;
    async fn state(&self) -> CategoryState;
}

enum Reload {
    Replace,
    Append,
}

/// Category page. Every fetch is tagged with a generation and only the
/// response of the latest generation is committed.
pub struct CategoryPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    state: Mutex<CategoryState>,
}

impl<I, V> CategoryPresenterImpl<I, V>
where
    I: CategoryInteractor,
    V: CategoryView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>, category_id: &str) -> Self {
        Self {
            interactor,
            view,
            state: Mutex::new(CategoryState::new(category_id)),
        }
    }

    async fn reload(&self, mode: Reload) -> Result<()> {
        let (generation, category_id, sort, offset, mode) = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            state.loading = true;
            // Rows of another category or sort are never extended
            let mode = match mode {
                Reload::Append if !state.rows_match_selection() => Reload::Replace,
                mode => mode,
            };
            let offset = match mode {
                Reload::Replace => None,
                Reload::Append => Some(state.tokens.items.len() as u32),
            };
            (state.generation, state.category_id.clone(), state.sort, offset, mode)
        };

        self.view.display_loading(&category_id, sort).await?;
        info!(
            "Loading tokens of {} by {} (generation {})",
            category_id, sort, generation
        );

        let result = self
            .interactor
            .load_tokens(&category_id, sort, offset)
            .await;

        let state = {
            let mut state = self.state.lock().await;
            if state.generation != generation {
                debug!(
                    "Discarding tokens of generation {}, latest is {}",
                    generation, state.generation
                );
                return Ok(());
            }

            let failure = match mode {
                Reload::Replace => state.tokens.apply(result),
                Reload::Append => state.tokens.append(result),
            };
            match failure {
                Some(e) => error!("Failed to load tokens of {}: {}", category_id, e),
                None => state.loaded_for = Some((category_id.clone(), sort)),
            }
            state.loading = false;
            state.updated_at = Some(Utc::now());
            state.clone()
        };

        self.view.display_category(&state).await
    }
}

#[async_trait]
impl<I, V> CategoryPresenter for CategoryPresenterImpl<I, V>
where
    I: CategoryInteractor + Send + Sync,
    V: CategoryView + Send + Sync,
{
    async fn show_category(&self, category_id: &str) -> Result<()> {
        self.state.lock().await.category_id = category_id.to_string();
        self.reload(Reload::Replace).await
    }

    async fn select_sort(&self, sort: SortKey) -> Result<()> {
        {
            let mut state = self.state.lock().await;
            if state.sort == sort {
                debug!("Sort {} already selected", sort);
                return Ok(());
            }
            state.sort = sort;
        }
        self.reload(Reload::Replace).await
    }

    async fn load_more(&self) -> Result<()> {
        self.reload(Reload::Append).await
    }

    async fn refresh(&self) -> Result<()> {
        self.reload(Reload::Replace).await
    }

    async fn state(&self) -> CategoryState {
        self.state.lock().await.clone()
    }
}
