//! Command-line interface parsing for the Pokedex CLI
//!
//! This module handles parsing of CLI arguments using clap: how long API
//! responses stay cached and how many location areas each `map` page shows.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The cache TTL must be a positive number of seconds
    #[error("Invalid cache TTL: must be at least 1 second")]
    ZeroCacheTtl,

    /// The page size must be positive
    #[error("Invalid page size: must be at least 1")]
    ZeroLimit,
}

/// Pokedex CLI - explore PokeAPI location areas and catch Pokemon
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokedex for browsing location areas and catching Pokemon")]
#[command(version)]
pub struct Cli {
    /// How long fetched API responses stay cached, in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 60)]
    pub cache_ttl: u64,

    /// Number of location areas shown per `map` page
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub limit: u32,
}

/// Validated configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Eviction interval for the response cache
    pub cache_ttl: Duration,
    /// Page size for the location-area listing
    pub limit: u32,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` when both values are positive
    /// * `Err(CliError)` for a zero TTL or zero page size
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.cache_ttl == 0 {
            return Err(CliError::ZeroCacheTtl);
        }
        if cli.limit == 0 {
            return Err(CliError::ZeroLimit);
        }

        Ok(StartupConfig {
            cache_ttl: Duration::from_secs(cli.cache_ttl),
            limit: cli.limit,
        })
    }
}
