//! Error types for the PokeAPI client

use std::fmt;

/// Errors that can occur when interacting with the PokeAPI
#[derive(Debug)]
pub enum PokeApiError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Failed to parse JSON response
    Json(serde_json::Error),
    /// Server answered with a non-success status
    Status { url: String, status: u16 },
}

impl PokeApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

impl fmt::Display for PokeApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "PokeAPI HTTP error: {}", e),
            Self::Json(e) => write!(f, "PokeAPI JSON parse error: {}", e),
            Self::Status { url, status } => {
                write!(f, "PokeAPI returned status {} for {}", status, url)
            }
        }
    }
}

impl std::error::Error for PokeApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for PokeApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for PokeApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for PokeAPI operations
pub type Result<T> = std::result::Result<T, PokeApiError>;
