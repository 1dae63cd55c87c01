use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::api::ApiConfig;
use crate::entity::ApiError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TOP_TOKENS_LIMIT: u32 = 20;
pub const DEFAULT_CATEGORY_TOKENS_LIMIT: u32 = 100;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root URL of the listing backend
    pub api_url: String,

    /// Rows in the dashboard's top tokens table
    pub top_tokens_limit: u32,

    /// Page size of a category listing
    pub category_tokens_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            top_tokens_limit: DEFAULT_TOP_TOKENS_LIMIT,
            category_tokens_limit: DEFAULT_CATEGORY_TOKENS_LIMIT,
        }
    }
}

impl AppConfig {
    /// Loads defaults, then `payattention.toml` (or `file`) if present, then
    /// the process environment (`API_URL`, `TOP_TOKENS_LIMIT`, ...).
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name("payattention").required(false),
        };

        Self::defaults()?
            .add_source(file_source)
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub(crate) fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("top_tokens_limit", DEFAULT_TOP_TOKENS_LIMIT)?
            .set_default("category_tokens_limit", DEFAULT_CATEGORY_TOKENS_LIMIT)
    }

    pub fn api_config(&self) -> Result<ApiConfig, ApiError> {
        ApiConfig::new(&self.api_url)
    }
}
