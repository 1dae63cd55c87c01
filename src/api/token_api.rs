use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::models::{ErrorBody, HealthStatus, SyncStatus, TokenQuery};
use crate::api::ApiConfig;
use crate::entity::{ApiError, Category, Token};

/// Calls offered by the listing backend.
#[async_trait]
pub trait TokenApi: Send + Sync {
    /// All categories with their aggregate statistics.
    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Tokens ordered by `query.sort`, at most `query.limit` of them.
    async fn fetch_tokens(&self, query: &TokenQuery) -> Result<Vec<Token>, ApiError>;

    /// A single token looked up by id.
    async fn fetch_token(&self, id: &str) -> Result<Token, ApiError>;

    async fn health(&self) -> Result<HealthStatus, ApiError>;

    /// Asks the backend to refresh its listings from upstream.
    async fn trigger_sync(&self) -> Result<SyncStatus, ApiError>;
}

/// `TokenApi` over HTTP. No retries, no timeout.
pub struct HttpTokenApi {
    http_client: Client,
    config: ApiConfig,
}

impl HttpTokenApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!("GET {} {:?}", url, query);

        let response = self.http_client.get(url.clone()).query(query).send().await?;
        Self::decode(url, response).await
    }

    async fn decode<T: DeserializeOwned>(
        url: Url,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            error!("Request to {} failed with status {}", url, status);
            return Err(ApiError::RequestFailed(status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            error!("Failed to parse response from {}: {}", url, e);
            ApiError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait]
impl TokenApi for HttpTokenApi {
    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.config.endpoint(&["api", "categories"]);
        let categories: Vec<Category> = self.get_json(url, &[]).await?;

        for category in &categories {
            category.validate()?;
        }

        info!("Fetched {} categories", categories.len());
        Ok(categories)
    }

    async fn fetch_tokens(&self, query: &TokenQuery) -> Result<Vec<Token>, ApiError> {
        let url = self.config.endpoint(&["api", "tokens"]);
        let tokens: Vec<Token> = self.get_json(url, &query.params()).await?;

        for token in &tokens {
            token.validate()?;
        }

        info!(
            "Fetched {} tokens (category: {}, sort: {})",
            tokens.len(),
            query.category.as_deref().unwrap_or("all"),
            query.sort
        );
        Ok(tokens)
    }

    async fn fetch_token(&self, id: &str) -> Result<Token, ApiError> {
        let url = self.config.endpoint(&["api", "tokens", id]);
        let value: serde_json::Value = self.get_json(url, &[]).await?;

        // Unknown ids come back as a 200 carrying an error object
        if let Ok(ErrorBody { error }) = serde_json::from_value::<ErrorBody>(value.clone()) {
            info!("Backend has no token {}: {}", id, error);
            return Err(ApiError::NotFound(id.to_string()));
        }

        let token: Token = serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        token.validate()?;
        Ok(token)
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.config.endpoint(&[]);
        self.get_json(url, &[]).await
    }

    async fn trigger_sync(&self) -> Result<SyncStatus, ApiError> {
        let url = self.config.endpoint(&["api", "sync"]);
        info!("Requesting backend sync");

        let response = self.http_client.post(url.clone()).send().await?;
        Self::decode(url, response).await
    }
}
