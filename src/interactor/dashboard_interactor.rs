use async_trait::async_trait;
use std::sync::Arc;

use crate::api::{TokenApi, TokenQuery};
use crate::entity::{ApiError, Category, SortKey, Token};

/// Outcome of the dashboard's two fetches, one result per fetch.
#[derive(Debug)]
pub struct DashboardSnapshot {
    pub categories: Result<Vec<Category>, ApiError>,
    pub tokens: Result<Vec<Token>, ApiError>,
}

#[async_trait]
pub trait DashboardInteractor: Send + Sync {
    async fn load_dashboard(&self) -> DashboardSnapshot;
}

pub struct DashboardInteractorImpl {
    api: Arc<dyn TokenApi>,
    top_tokens_limit: u32,
}

impl DashboardInteractorImpl {
    pub fn new(api: Arc<dyn TokenApi>, top_tokens_limit: u32) -> Self {
        Self {
            api,
            top_tokens_limit,
        }
    }
}

#[async_trait]
impl DashboardInteractor for DashboardInteractorImpl {
    async fn load_dashboard(&self) -> DashboardSnapshot {
        let query = TokenQuery {
            category: None,
            sort: SortKey::MarketCap,
            limit: self.top_tokens_limit,
            offset: None,
        };

        // Both requests are in flight at once and joined before returning
        let (categories, tokens) =
            futures::join!(self.api.fetch_categories(), self.api.fetch_tokens(&query));

        DashboardSnapshot { categories, tokens }
    }
}
