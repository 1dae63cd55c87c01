use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Page to open on start: /, /category/<id> or /token/<id>
    #[arg(short, long, default_value = "/")]
    pub route: String,

    /// Backend base URL, overrides API_URL and the configuration file
    #[arg(long)]
    pub api_url: Option<String>,

    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Render the page once and exit instead of starting the shell
    #[arg(long)]
    pub once: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dashboard_shell() {
        let cli = Cli::parse_from(["payattention"]);
        assert_eq!(cli.route, "/");
        assert!(cli.api_url.is_none());
        assert!(!cli.once);
    }

    #[test]
    fn accepts_overrides() {
        let cli = Cli::parse_from([
            "payattention",
            "--route",
            "/category/pump-fun",
            "--api-url",
            "https://api.example.com",
            "--once",
        ]);
        assert_eq!(cli.route, "/category/pump-fun");
        assert_eq!(cli.api_url.as_deref(), Some("https://api.example.com"));
        assert!(cli.once);
    }
}
