use anyhow::Result;
use log::{error, info, warn};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::{help_text, Command};
use crate::di::ServiceContainer;
use crate::router::{Route, Router};
use crate::view::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive front end: reads commands and drives the router.
pub struct Shell {
    services: Arc<ServiceContainer>,
    router: Router,
    screen: Screen,
}

impl Shell {
    pub fn new(services: Arc<ServiceContainer>, screen: Screen) -> Self {
        let router = Router::new(services.clone(), screen.clone());
        Self {
            services,
            router,
            screen,
        }
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    pub fn open(&mut self, route: Route) {
        self.router.navigate(route);
    }

    pub async fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Open(route) => self.router.navigate(route),
            Command::Sort(sort) => self.router.select_sort(sort)?,
            Command::More => self.router.load_more()?,
            Command::Refresh => self.router.refresh()?,
            Command::Sync => self.sync()?,
            Command::Status => self.status().await?,
            Command::Help => self.screen.show(&help_text())?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Handles one input line. Bad input and failed commands are reported on
    /// screen and never end the session.
    pub async fn handle_line(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("Rejected input {:?}: {}", line, e);
                self.screen.show(&e.to_string())?;
                return Ok(Flow::Continue);
            }
        };

        match self.execute(command).await {
            Ok(flow) => Ok(flow),
            Err(e) => {
                error!("Command failed: {}", e);
                self.screen.show(&format!("Error: {}", e))?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Reads commands until `quit` or end of input, then waits for the
    /// fetches still running.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if self.handle_line(&line).await? == Flow::Quit {
                info!("Quit requested");
                break;
            }
        }
        self.router.settle().await;
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        self.screen.show("Requesting backend sync...")?;
        self.router.sync();
        Ok(())
    }

    async fn status(&self) -> Result<()> {
        let api_url = &self.services.config().api_url;
        match self.services.token_api().health().await {
            Ok(health) => self.screen.show(&format!(
                "Backend {} ({}) at {}",
                health.status,
                health.app.as_deref().unwrap_or("unknown app"),
                api_url
            )),
            Err(e) => {
                error!("Health check failed: {}", e);
                self.screen
                    .show(&format!("Backend unreachable at {}: {}", api_url, e))
            }
        }?;

        if let Some(route) = self.router.current_route() {
            self.screen.show(&format!("Current page: {}", route))?;
        }
        Ok(())
    }
}
