//! End-to-end behavior of the expiring response cache
//!
//! Exercises the full insert/sweep/evict cycle at the one-second scale the
//! application actually runs at, plus deterministic reaper teardown.

use std::time::Duration;

use pokedex::cache::Cache;

#[tokio::test]
async fn entry_lives_through_the_first_interval_and_is_evicted_after() {
    let cache = Cache::new(Duration::from_secs(1));

    cache.add("loc1", br#"{"count":1}"#.to_vec()).await;
    assert_eq!(
        cache.get("loc1").await,
        Some(br#"{"count":1}"#.to_vec()),
        "fresh entry must be served before any sweep"
    );

    // Two full sweep periods plus slack: the sweep at ~2s sees the entry
    // past its eviction age and removes it.
    tokio::time::sleep(Duration::from_millis(2500)).await;

    assert_eq!(cache.get("loc1").await, None, "entry must be swept by now");
    cache.shutdown();
}

#[tokio::test]
async fn shutdown_leaves_entries_untouched() {
    let cache = Cache::new(Duration::from_millis(100));

    cache.add("loc1", b"payload".to_vec()).await;
    cache.shutdown();

    // Well past several would-be sweep periods.
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(cache.get("loc1").await, Some(b"payload".to_vec()));
}

#[tokio::test]
async fn separate_caches_do_not_share_entries() {
    let a = Cache::new(Duration::from_secs(10));
    let b = Cache::new(Duration::from_secs(10));

    a.add("key", b"from-a".to_vec()).await;

    assert_eq!(a.get("key").await, Some(b"from-a".to_vec()));
    assert_eq!(b.get("key").await, None);
    a.shutdown();
    b.shutdown();
}
