//! In-memory byte cache with write-time TTL expiry
//!
//! Entries are keyed by string (typically a request URL) and hold raw
//! response bytes. A background reaper task sweeps the store once per
//! configured interval and removes every entry older than that interval.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use ttl_cache::Cache;
//!
//! # async fn example() -> ttl_cache::Result<()> {
//! let cache = Cache::new(Duration::from_secs(10))?;
//!
//! cache.add("https://pokeapi.co/api/v2/location-area/", b"{}".to_vec());
//! assert_eq!(cache.get("https://pokeapi.co/api/v2/location-area/"), Some(b"{}".to_vec()));
//!
//! cache.close();
//! # Ok(())
//! # }
//! ```

mod cache;
mod error;
mod types;

pub use cache::Cache;
pub use error::{CacheError, Result};
pub use types::CacheStats;
