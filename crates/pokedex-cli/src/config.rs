//! Configuration loaded from the environment

use crate::error::{PokedexError, Result};
use pokeapi_client::PokeApiClient;
use std::time::Duration;

/// Configuration for the pokedex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache TTL and reaper sweep period
    pub cache_interval: Duration,
    pub base_url: String,
    pub request_timeout: Duration,
    /// Show the dot animation while a throw is in flight
    pub catch_animation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: Duration::from_secs(10),
            base_url: PokeApiClient::DEFAULT_BASE_URL.to_string(),
            request_timeout: PokeApiClient::DEFAULT_TIMEOUT,
            catch_animation: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let cache_interval = match lookup("POKEDEX_CACHE_INTERVAL_SECS") {
            Some(raw) => Duration::from_secs(parse_u64("POKEDEX_CACHE_INTERVAL_SECS", &raw)?),
            None => defaults.cache_interval,
        };

        let base_url = lookup("POKEAPI_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.base_url);

        let request_timeout = match lookup("POKEAPI_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_u64("POKEAPI_TIMEOUT_SECS", &raw)?),
            None => defaults.request_timeout,
        };

        let catch_animation = match lookup("POKEDEX_CATCH_ANIMATION") {
            Some(raw) => parse_bool("POKEDEX_CATCH_ANIMATION", &raw)?,
            None => defaults.catch_animation,
        };

        Ok(Self {
            cache_interval,
            base_url,
            request_timeout,
            catch_animation,
        })
    }
}

fn parse_u64(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| PokedexError::Config(format!("{key}={raw:?} is not a valid number: {e}")))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PokedexError::Config(format!(
            "{key}={raw:?} is not a valid boolean"
        ))),
    }
}
