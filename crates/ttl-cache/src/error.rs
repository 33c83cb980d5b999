//! Error types for the TTL cache

use std::fmt;

/// Errors that can occur when constructing a cache
///
/// `add` and `get` never fail; only construction is fallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The sweep interval was zero
    ZeroInterval,
    /// The sweep interval does not fit on the runtime clock
    IntervalTooLarge,
    /// No tokio runtime was available to host the reaper task
    NoRuntime,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::ZeroInterval => write!(f, "Cache interval must be greater than zero"),
            CacheError::IntervalTooLarge => write!(f, "Cache interval is too large"),
            CacheError::NoRuntime => {
                write!(f, "Cache must be created inside a tokio runtime")
            }
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache construction
pub type Result<T> = std::result::Result<T, CacheError>;
