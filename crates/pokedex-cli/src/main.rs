//! Pokedex - interactive PokeAPI browser
//!
//! Browse location areas, explore the creatures found there, catch them
//! and inspect what you caught. API responses are kept in a TTL cache so
//! paging back and forth does not refetch.

mod catch;
mod commands;
mod config;
mod error;
mod repl;
mod session;

use crate::commands::CommandRegistry;
use crate::config::Config;
use crate::error::Result;
use crate::session::Session;
use pokeapi_client::PokeApiClient;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};
use ttl_cache::Cache;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let config = Config::from_env()?;
    info!(
        base_url = %config.base_url,
        cache_interval_secs = config.cache_interval.as_secs(),
        request_timeout_secs = config.request_timeout.as_secs(),
        "Starting Pokedex"
    );

    let cache = Cache::new(config.cache_interval)?;
    let client =
        PokeApiClient::with_timeout(&config.base_url, config.request_timeout, cache.clone())?;

    let registry = CommandRegistry::new();
    let mut session = Session::new(client, StdRng::from_os_rng(), config.catch_animation);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let outcome = repl::run(&registry, &mut session, stdin, &mut stdout).await;

    info!(stats = ?cache.stats(), "Pokedex closed");
    cache.close();

    outcome
}

/// Used when `RUST_LOG` is unset or empty
const DEFAULT_LOG_DIRECTIVE: &str = "pokedex=warn";

/// Logs go to stderr so they do not interleave with the prompt
fn init_logging() -> Result<()> {
    let env_filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok())?;

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    };

    Ok(())
}

fn log_filter(rust_log: Option<String>) -> Result<EnvFilter> {
    let directives = rust_log
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());
    Ok(EnvFilter::try_new(directives)?)
}
