//! Shared TTL cache with a background reaper

use crate::error::{CacheError, Result};
use crate::types::{CacheStats, Entry};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// State shared between cache handles and the reaper task
struct Shared {
    /// One lock for add, get and sweep alike
    entries: Mutex<HashMap<String, Entry>>,
    /// Sweep period and expiry threshold
    interval: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    reaped: AtomicU64,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        // Entries are plain data, a panic elsewhere cannot leave the map half-updated.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Remove every entry older than the interval, returning how many were removed
    fn sweep(&self, now: Instant) -> usize {
        let mut entries = self.lock();

        let expired: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now, self.interval))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            entries.remove(key);
        }

        let removed = expired.len();
        if removed > 0 {
            debug!(removed, remaining = entries.len(), "Reaped expired cache entries");
        }
        drop(entries);

        self.reaped.fetch_add(removed as u64, Ordering::Relaxed);
        removed
    }
}

/// Cancels the reaper once the last cache handle goes away
struct ReaperGuard {
    cancel: CancellationToken,
}

impl Drop for ReaperGuard {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Byte cache keyed by string with write-time TTL expiry
///
/// Cloning is cheap; every clone shares the same entries and the same
/// reaper. Staleness is enforced only by the reaper: `get` returns an
/// entry that is past its TTL but has not been swept yet.
#[derive(Clone)]
pub struct Cache {
    shared: Arc<Shared>,
    reaper: Arc<ReaperGuard>,
}

impl Cache {
    /// Create an empty cache and start its reaper
    ///
    /// The reaper sweeps once per `interval`, first after one full interval,
    /// and runs until [`Cache::close`] is called or every handle is dropped.
    pub fn new(interval: Duration) -> Result<Self> {
        Self::with_cancellation(interval, CancellationToken::new())
    }

    /// Create a cache whose reaper also stops when `parent` is cancelled
    pub fn with_cancellation(interval: Duration, parent: CancellationToken) -> Result<Self> {
        if interval.is_zero() {
            return Err(CacheError::ZeroInterval);
        }
        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;
        let first_sweep = Instant::now()
            .checked_add(interval)
            .ok_or(CacheError::IntervalTooLarge)?;

        let shared = Arc::new(Shared {
            entries: Mutex::new(HashMap::new()),
            interval,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            reaped: AtomicU64::new(0),
        });
        let cancel = parent.child_token();

        runtime.spawn(reap_loop(Arc::clone(&shared), first_sweep, cancel.clone()));
        debug!(?interval, "Cache reaper started");

        Ok(Self {
            shared,
            reaper: Arc::new(ReaperGuard { cancel }),
        })
    }

    /// Store `payload` under `key`, replacing any previous entry
    pub fn add(&self, key: impl Into<String>, payload: impl Into<Vec<u8>>) {
        let key = key.into();
        let payload = payload.into();

        let mut entries = self.shared.lock();
        entries.insert(key, Entry::new(payload, Instant::now()));
    }

    /// Look up `key`, returning a copy of its payload if present
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let payload = {
            let entries = self.shared.lock();
            entries.get(key).map(|entry| entry.payload.clone())
        };

        let counter = if payload.is_some() {
            &self.shared.hits
        } else {
            &self.shared.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);

        payload
    }

    /// The configured TTL and sweep period
    pub fn interval(&self) -> Duration {
        self.shared.interval
    }

    pub fn len(&self) -> usize {
        self.shared.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get current cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.shared.hits.load(Ordering::Relaxed),
            misses: self.shared.misses.load(Ordering::Relaxed),
            reaped: self.shared.reaped.load(Ordering::Relaxed),
        }
    }

    /// Stop the reaper
    ///
    /// Entries stay readable and writable afterwards; they just no longer expire.
    pub fn close(&self) {
        self.reaper.cancel.cancel();
    }

    /// Whether the reaper has been asked to stop
    pub fn is_closed(&self) -> bool {
        self.reaper.cancel.is_cancelled()
    }

    #[cfg(test)]
    fn sweep_now(&self) -> usize {
        self.shared.sweep(Instant::now())
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("interval", &self.shared.interval)
            .field("entries", &self.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}

async fn reap_loop(shared: Arc<Shared>, first_sweep: Instant, cancel: CancellationToken) {
    let mut ticker = time::interval_at(first_sweep, shared.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                shared.sweep(Instant::now());
            }
        }
    }

    debug!("Cache reaper stopped");
}
