use async_trait::async_trait;
use std::sync::Arc;

use crate::api::TokenApi;
use crate::entity::{ApiError, Token};

#[async_trait]
pub trait TokenInteractor: Send + Sync {
    async fn get_token(&self, token_id: &str) -> Result<Token, ApiError>;
}

pub struct TokenInteractorImpl {
    api: Arc<dyn TokenApi>,
}

impl TokenInteractorImpl {
    pub fn new(api: Arc<dyn TokenApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TokenInteractor for TokenInteractorImpl {
    async fn get_token(&self, token_id: &str) -> Result<Token, ApiError> {
        self.api.fetch_token(token_id).await
    }
}
