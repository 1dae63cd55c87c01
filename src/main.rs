//! PayAttention dashboard - main executable
//!
//! Opens the requested page against the configured backend and then reads
//! shell commands from standard input until `quit`.
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use log::info;
use payattention_dashboard::cli::Cli;
use payattention_dashboard::{create_application, AppConfig, Route, Screen};
use tokio::io::BufReader;

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Logs go to stderr so they stay out of the rendered pages
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!(
        "Starting PayAttention dashboard v{}",
        payattention_dashboard::VERSION
    );

    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    info!("Using backend at {}", config.api_url);

    let route: Route = cli
        .route
        .parse()
        .with_context(|| format!("Cannot open {}", cli.route))?;

    let screen = Screen::stdout();
    let mut shell =
        create_application(config, screen.clone()).context("Failed to create application")?;

    shell.open(route);

    if cli.once {
        shell.router_mut().settle().await;
        return Ok(());
    }

    screen.show("Type `help` for the list of commands.")?;
    info!("Shell ready, reading commands");
    shell
        .run(BufReader::new(tokio::io::stdin()))
        .await
        .context("Shell stopped")?;

    Ok(())
}
