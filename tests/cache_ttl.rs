use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use kajibot::data::Snapshot;
use kajibot::error::DataSourceError;
use kajibot::services::SnapshotCache;

const TTL: Duration = Duration::from_secs(600);

#[tokio::test(start_paused = true)]
async fn reuses_within_ttl_and_refetches_after() {
    let cache = SnapshotCache::new(TTL);
    let fetches = AtomicUsize::new(0);
    let counter = &fetches;
    let fetch = move || async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok::<_, DataSourceError>(Snapshot::default())
    };

    cache.get(false, fetch).await.unwrap();
    assert_eq!(fetches.load(Ordering::SeqCst), 1);

    tokio::time::advance(Duration::from_secs(9 * 60)).await;
    cache.get(false, fetch).await.unwrap();
    assert_eq!(fetches.load(Ordering::SeqCst), 1);

    tokio::time::advance(Duration::from_secs(2 * 60)).await;
    cache.get(false, fetch).await.unwrap();
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn force_refresh_ignores_age() {
    let cache = SnapshotCache::new(TTL);
    let fetches = AtomicUsize::new(0);
    let counter = &fetches;
    let fetch = move || async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok::<_, DataSourceError>(Snapshot::default())
    };
    cache.get(false, fetch).await.unwrap();
    cache.get(true, fetch).await.unwrap();
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_keeps_previous_entry() {
    let cache = SnapshotCache::new(TTL);
    let mut first = Snapshot::default();
    first.stats.insert("alice".into(), 7);
    cache.store(first.clone()).await;

    tokio::time::advance(Duration::from_secs(11 * 60)).await;
    let err = cache
        .get(false, || async { Err(DataSourceError::Status(502)) })
        .await;
    assert!(matches!(err, Err(DataSourceError::Status(502))));
    assert_eq!(cache.current().await.as_deref(), Some(&first));
    assert!(cache.fresh().await.is_none());
}

#[tokio::test]
async fn invalidate_empties_the_slot() {
    let cache = SnapshotCache::new(TTL);
    cache.store(Snapshot::default()).await;
    assert!(cache.fresh().await.is_some());
    cache.invalidate().await;
    assert!(cache.current().await.is_none());
    let (hits, misses) = cache.stats();
    assert_eq!((hits, misses), (1, 0));
}
