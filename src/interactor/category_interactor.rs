use async_trait::async_trait;
use std::sync::Arc;

use crate::api::{TokenApi, TokenQuery};
use crate::entity::{ApiError, SortKey, Token};

#[async_trait]
pub trait CategoryInteractor: Send + Sync {
    /// One page of a category's tokens. `offset` skips already shown rows.
    async fn load_tokens(
        &self,
        category_id: &str,
        sort: SortKey,
        offset: Option<u32>,
    ) -> Result<Vec<Token>, ApiError>;
}

pub struct CategoryInteractorImpl {
    api: Arc<dyn TokenApi>,
    page_size: u32,
}

impl CategoryInteractorImpl {
    pub fn new(api: Arc<dyn TokenApi>, page_size: u32) -> Self {
        Self { api, page_size }
    }
}

#[async_trait]
impl CategoryInteractor for CategoryInteractorImpl {
    async fn load_tokens(
        &self,
        category_id: &str,
        sort: SortKey,
        offset: Option<u32>,
    ) -> Result<Vec<Token>, ApiError> {
        let mut query = TokenQuery::for_category(category_id, sort, self.page_size);
        query.offset = offset;
        self.api.fetch_tokens(&query).await
    }
}
