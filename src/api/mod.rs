pub mod config;
pub mod models;
pub mod token_api;

pub use config::ApiConfig;
pub use models::{HealthStatus, SyncStatus, TokenQuery};
pub use token_api::{HttpTokenApi, TokenApi};
