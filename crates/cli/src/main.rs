//! CallDeck binary entry point.
//!
//! Keeps `main` thin: bootstrap logging and the environment, parse the
//! command line, hand off to the dispatcher in `commands`.

use clap::Parser;

use calldeck_cli::commands::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging before anything else so environment loading is observable.
    // Default to warnings only; tables stay readable unless RUST_LOG opts in.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment from .env"),
        Err(err) => tracing::debug!(error = %err, "no .env file loaded"),
    }

    let cli = Cli::parse();
    commands::run(cli).await
}
