//! Read-through snapshot cache with a single slot and TTL expiry.
//!
//! The lock only guards reading or swapping the slot and is never held across a
//! fetch. Concurrent misses each fetch independently and the last one to finish
//! wins the slot (no single-flight, no versioning).
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::data::Snapshot;
use crate::error::DataSourceError;

struct CacheEntry {
    snapshot: Arc<Snapshot>,
    fetched_at: Instant,
}

pub struct SnapshotCache {
    ttl: Duration,
    slot: RwLock<Option<CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The cached snapshot if it is younger than the TTL.
    pub async fn fresh(&self) -> Option<Arc<Snapshot>> {
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some(entry) if entry.fetched_at.elapsed() < self.ttl => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(target = "cache.snapshot", hit = true);
                Some(entry.snapshot.clone())
            }
            Some(_) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(target = "cache.snapshot", hit = false, reason = "expired");
                None
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(target = "cache.snapshot", hit = false, reason = "empty");
                None
            }
        }
    }

    /// Whatever is cached, regardless of age.
    pub async fn current(&self) -> Option<Arc<Snapshot>> {
        self.slot.read().await.as_ref().map(|e| e.snapshot.clone())
    }

    /// Replaces the slot with a freshly fetched snapshot.
    pub async fn store(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        *self.slot.write().await = Some(CacheEntry {
            snapshot: snapshot.clone(),
            fetched_at: Instant::now(),
        });
        snapshot
    }

    /// Returns the fresh snapshot, or fetches and stores a new one.
    /// `force_refresh` skips the freshness check. A failed fetch leaves the slot untouched.
    pub async fn get<F, Fut>(
        &self,
        force_refresh: bool,
        fetch: F,
    ) -> Result<Arc<Snapshot>, DataSourceError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Snapshot, DataSourceError>>,
    {
        if !force_refresh {
            if let Some(snapshot) = self.fresh().await {
                return Ok(snapshot);
            }
        } else {
            debug!(target = "cache.snapshot", bypass = true);
        }
        let snapshot = fetch().await?;
        Ok(self.store(snapshot).await)
    }

    /// Drops the cached snapshot unconditionally.
    pub async fn invalidate(&self) {
        *self.slot.write().await = None;
        debug!(target = "cache.snapshot", "invalidated");
    }

    /// Counters for diagnostics (hit, miss).
    pub fn stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
