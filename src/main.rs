//! Pokedex CLI - interactive explorer for the PokeAPI
//!
//! Reads commands from a `Pokedex > ` prompt to page through location areas,
//! explore their encounters, and catch, inspect, and list Pokemon. Every API
//! response passes through an in-memory expiring cache with a background
//! reaper.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pokedex::api::ApiClient;
use pokedex::cache::Cache;
use pokedex::cli::{Cli, StartupConfig};
use pokedex::commands::AppState;
use pokedex::repl;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Quiet by default so diagnostics never mix into the prompt;
    // RUST_LOG=pokedex=debug shows cache hits and reaper sweeps.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli)?;

    let cache = Cache::new(config.cache_ttl);
    let client = ApiClient::new(cache.clone());
    let mut state = AppState::new(client.location_areas_url(config.limit));

    repl::run(&mut state, &client).await?;

    cache.shutdown();
    Ok(())
}
