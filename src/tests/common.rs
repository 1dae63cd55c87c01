use async_trait::async_trait;
use std::sync::Mutex;

use crate::api::{HealthStatus, SyncStatus, TokenApi, TokenQuery};
use crate::entity::{ApiError, Category, Token};

pub fn category(id: &str, name: &str, token_count: u64, market_cap: f64, volume: f64) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        token_count,
        total_market_cap: market_cap,
        total_volume_24h: volume,
    }
}

pub fn token(id: &str, name: &str, symbol: &str, market_cap: f64) -> Token {
    Token {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        image: None,
        price: Some(0.01),
        market_cap: Some(market_cap),
        volume_24h: Some(market_cap / 10.0),
        price_change_24h: Some(1.5),
        twitter: None,
        telegram: None,
        website: None,
        address: None,
        category: None,
    }
}

type TokensFn = Box<dyn Fn(&TokenQuery) -> Result<Vec<Token>, ApiError> + Send + Sync>;

/// In-memory `TokenApi` with swappable answers. Records every token query.
pub struct StubApi {
    categories: Mutex<Result<Vec<Category>, u16>>,
    tokens: Mutex<TokensFn>,
    queries: Mutex<Vec<TokenQuery>>,
    syncs: Mutex<usize>,
}

impl StubApi {
    pub fn new(categories: Vec<Category>, tokens: Vec<Token>) -> Self {
        Self {
            categories: Mutex::new(Ok(categories)),
            tokens: Mutex::new(Box::new(move |_| Ok(tokens.clone()))),
            queries: Mutex::new(Vec::new()),
            syncs: Mutex::new(0),
        }
    }

    pub fn fail_categories(&self, status: u16) {
        *self.categories.lock().unwrap() = Err(status);
    }

    pub fn fail_tokens(&self, status: u16) {
        *self.tokens.lock().unwrap() = Box::new(move |_| Err(ApiError::RequestFailed(status)));
    }

    pub fn answer_tokens<F>(&self, answer: F)
    where
        F: Fn(&TokenQuery) -> Result<Vec<Token>, ApiError> + Send + Sync + 'static,
    {
        *self.tokens.lock().unwrap() = Box::new(answer);
    }

    pub fn queries(&self) -> Vec<TokenQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn sync_count(&self) -> usize {
        *self.syncs.lock().unwrap()
    }
}

#[async_trait]
impl TokenApi for StubApi {
    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        match &*self.categories.lock().unwrap() {
            Ok(categories) => Ok(categories.clone()),
            Err(status) => Err(ApiError::RequestFailed(*status)),
        }
    }

    async fn fetch_tokens(&self, query: &TokenQuery) -> Result<Vec<Token>, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        let answer = self.tokens.lock().unwrap();
        answer(query)
    }

    async fn fetch_token(&self, id: &str) -> Result<Token, ApiError> {
        let tokens = {
            let answer = self.tokens.lock().unwrap();
            answer(&TokenQuery::default())?
        };
        tokens
            .into_iter()
            .find(|token| token.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        Ok(HealthStatus {
            status: "online".into(),
            app: Some("PayAttention.sol".into()),
        })
    }

    async fn trigger_sync(&self) -> Result<SyncStatus, ApiError> {
        *self.syncs.lock().unwrap() += 1;
        Ok(SyncStatus {
            status: "ok".into(),
            message: Some("Sync complete".into()),
        })
    }
}
