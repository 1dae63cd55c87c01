//! PayAttention dashboard
//!
//! A terminal client for the PayAttention listing backend. It shows meme coin
//! categories with their aggregate market statistics, the top tokens by market
//! cap, and per-category token listings with a selectable sort order.
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod utils;
pub mod view;

#[cfg(test)]
pub mod tests;

use std::sync::Arc;

// Re-export commonly used items
pub use api::{ApiConfig, HttpTokenApi, TokenApi, TokenQuery};
pub use commands::{Command, Flow, Shell};
pub use config::AppConfig;
pub use di::ServiceContainer;
pub use entity::{ApiError, Category, SortKey, Token};
pub use router::{Route, Router};
pub use view::Screen;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wires the HTTP client, the service container and the shell for `config`.
pub fn create_application(config: AppConfig, screen: Screen) -> Result<Shell, ApiError> {
    let services = Arc::new(ServiceContainer::from_config(config)?);
    Ok(Shell::new(services, screen))
}
