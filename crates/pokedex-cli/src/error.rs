//! Error types for the pokedex CLI

use std::fmt;

#[derive(Debug)]
pub enum PokedexError {
    Cache(ttl_cache::CacheError),
    Api(pokeapi_client::PokeApiError),
    Io(Box<std::io::Error>),
    Config(String),
}

impl fmt::Display for PokedexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokedexError::Cache(err) => write!(f, "Cache error: {}", err),
            PokedexError::Api(err) => write!(f, "{}", err),
            PokedexError::Io(err) => write!(f, "IO error: {}", err),
            PokedexError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for PokedexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PokedexError::Cache(err) => Some(err),
            PokedexError::Api(err) => Some(err),
            PokedexError::Io(err) => Some(err.as_ref()),
            PokedexError::Config(_) => None,
        }
    }
}

impl From<ttl_cache::CacheError> for PokedexError {
    fn from(err: ttl_cache::CacheError) -> Self {
        PokedexError::Cache(err)
    }
}

impl From<pokeapi_client::PokeApiError> for PokedexError {
    fn from(err: pokeapi_client::PokeApiError) -> Self {
        PokedexError::Api(err)
    }
}

impl From<std::io::Error> for PokedexError {
    fn from(err: std::io::Error) -> Self {
        PokedexError::Io(Box::new(err))
    }
}

impl From<tracing_subscriber::filter::ParseError> for PokedexError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        PokedexError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
