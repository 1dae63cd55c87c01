use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::{error, info};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::entity::DashboardState;
use crate::interactor::DashboardInteractor;
use crate::view::DashboardView;

#[async_trait]
pub trait DashboardPresenter: Send + Sync {
    /// Mounts (or re-mounts) the dashboard: loading, both fetches, loaded.
    async fn show_dashboard(&self) -> Result<()>;
    async fn state(&self) -> DashboardState;
}

pub struct DashboardPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    state: Mutex<DashboardState>,
}

impl<I, V> DashboardPresenterImpl<I, V>
where
    I: DashboardInteractor,
    V: DashboardView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self {
            interactor,
            view,
            state: Mutex::new(DashboardState::default()),
        }
    }
}

#[async_trait]
impl<I, V> DashboardPresenter for DashboardPresenterImpl<I, V>
where
    I: DashboardInteractor + Send + Sync,
    V: DashboardView + Send + Sync,
{
    async fn show_dashboard(&self) -> Result<()> {
        self.state.lock().await.loading = true;
        self.view.display_loading().await?;

        info!("Loading dashboard");
        let snapshot = self.interactor.load_dashboard().await;

        let state = {
            let mut state = self.state.lock().await;
            if let Some(e) = state.categories.apply(snapshot.categories) {
                error!("Failed to load categories: {}", e);
            }
            if let Some(e) = state.tokens.apply(snapshot.tokens) {
                error!("Failed to load top tokens: {}", e);
            }
            state.loading = false;
            state.updated_at = Some(Utc::now());
            state.clone()
        };

        self.view.display_dashboard(&state).await
    }

    async fn state(&self) -> DashboardState {
        self.state.lock().await.clone()
    }
}
