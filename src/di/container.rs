use std::sync::Arc;

use crate::api::{HttpTokenApi, TokenApi};
use crate::config::AppConfig;
use crate::entity::ApiError;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    token_api: Arc<dyn TokenApi>,
    config: AppConfig,
}

impl ServiceContainer {
    pub fn new(token_api: Arc<dyn TokenApi>, config: AppConfig) -> Self {
        Self { token_api, config }
    }

    /// Wires the HTTP client against the configured backend.
    pub fn from_config(config: AppConfig) -> Result<Self, ApiError> {
        let api_config = config.api_config()?;
        let token_api = Arc::new(HttpTokenApi::new(api_config)) as Arc<dyn TokenApi>;
        Ok(Self::new(token_api, config))
    }

    pub fn token_api(&self) -> Arc<dyn TokenApi> {
        self.token_api.clone()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
