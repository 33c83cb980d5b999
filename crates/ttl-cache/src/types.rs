//! Cache types

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::Instant;

/// A stored payload and the instant it was written
///
/// Age is always measured from `created_at`; reads never refresh it.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) payload: Vec<u8>,
    pub(crate) created_at: Instant,
}

impl Entry {
    pub(crate) fn new(payload: Vec<u8>, created_at: Instant) -> Self {
        Self {
            payload,
            created_at,
        }
    }

    pub(crate) fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Strictly older than `ttl`
    pub(crate) fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }
}

/// Statistics about the cache
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    /// Total entries removed by reaper sweeps
    pub reaped: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.reaped, 0);
    }

    #[test]
    fn test_cache_stats_serialization() {
        let stats = CacheStats {
            entries: 3,
            hits: 12,
            misses: 4,
            reaped: 7,
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"reaped\":7"));

        let deserialized: CacheStats = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, stats);
    }

    #[test]
    fn test_entry_expiry_is_strict() {
        let created = Instant::now();
        let entry = Entry::new(vec![1, 2], created);
        let ttl = Duration::from_millis(100);

        assert!(!entry.is_expired(created, ttl));
        assert!(!entry.is_expired(created + ttl, ttl));
        assert!(entry.is_expired(created + ttl + Duration::from_millis(1), ttl));
    }

    #[test]
    fn test_entry_age_before_creation_is_zero() {
        let now = Instant::now();
        let entry = Entry::new(Vec::new(), now + Duration::from_secs(1));
        assert_eq!(entry.age(now), Duration::ZERO);
    }
}
