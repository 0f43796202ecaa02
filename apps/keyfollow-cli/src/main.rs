//! keyfollow - correlate a Twitter follow graph with Keybase identities
//!
//! Authenticates to Twitter with an app-only bearer token, collects the
//! subject's friend and follower ids, resolves them to profiles, logs in to
//! Keybase with the salted-challenge handshake, and prints the handles that
//! have a linked Keybase identity.

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use keyfollow_cli::config::Config;
use keyfollow_cli::engine::CorrelationEngine;
use keyfollow_cli::error::CliResult;
use keyfollow_cli::output;

/// Correlate a Twitter follow graph with Keybase identities.
#[derive(Parser)]
#[command(name = "keyfollow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Subject account, overriding TWITTER_SCREEN_NAME
    #[arg(long)]
    screen_name: Option<String>,

    /// Pagination bound per list endpoint, overriding KEYFOLLOW_MAX_PAGES
    #[arg(long)]
    max_pages: Option<u32>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = Config::from_env()?;
    if let Some(screen_name) = cli.screen_name {
        config.twitter_screen_name = screen_name;
    }
    if let Some(max_pages) = cli.max_pages {
        config.max_pages = max_pages;
    }

    let result = CorrelationEngine::new(config).run().await?;
    output::print_correlations(&result)
}

/// Diagnostics go to stderr; stdout is reserved for the result.
fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
