use std::str::FromStr;

use crate::entity::SortKey;
use crate::router::{Route, RouteError};

pub mod shell;

pub use shell::{Flow, Shell};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type `help` for the list of commands")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Invalid sort key: {0}")]
    InvalidSort(String),
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// A line typed into the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Open(Route),
    Sort(SortKey),
    More,
    Refresh,
    Sync,
    Status,
    Help,
    Quit,
}

/// Command names with their help text, in display order.
pub fn register_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("open <path>", "open a page: /, /category/<id> or /token/<id>"),
        ("sort <key>", "sort the category page by market_cap, volume_24h or price_change_24h"),
        ("more", "load the next page of the category listing"),
        ("refresh", "reload the current page"),
        ("sync", "ask the backend to refresh its data, then reload"),
        ("status", "check that the backend is reachable"),
        ("help", "display this help message"),
        ("quit", "leave the dashboard"),
    ]
}

pub fn help_text() -> String {
    let width = register_commands()
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let mut text = String::from("Available commands:\n");
    for (name, description) in register_commands() {
        text.push_str(&format!("  {:<width$}  {}\n", name, description, width = width));
    }
    text.push_str("A bare path such as /category/pump-fun opens that page.");
    text
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.starts_with('/') {
            return Ok(Command::Open(line.parse()?));
        }

        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let argument = parts.next();

        match (name.as_str(), argument) {
            ("open" | "o", Some(path)) => Ok(Command::Open(path.parse()?)),
            ("open" | "o", None) => Err(CommandError::Usage("open <path>")),
            ("sort" | "s", Some(key)) => key
                .parse()
                .map(Command::Sort)
                .map_err(CommandError::InvalidSort),
            ("sort" | "s", None) => Err(CommandError::Usage("sort <key>")),
            ("more" | "m", _) => Ok(Command::More),
            ("refresh" | "r", _) => Ok(Command::Refresh),
            ("sync", _) => Ok(Command::Sync),
            ("status", _) => Ok(Command::Status),
            ("help" | "h" | "?", _) => Ok(Command::Help),
            ("quit" | "q" | "exit", _) => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}
