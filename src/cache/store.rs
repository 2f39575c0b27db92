//! In-memory expiring cache for raw API response bytes
//!
//! Stores opaque byte payloads keyed by request URL, each tagged with its
//! insertion time. A background reaper task sweeps the map once per interval
//! and evicts entries older than that same interval.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

/// A single cached payload together with its insertion time
#[derive(Debug, Clone)]
struct CacheEntry {
    /// When the entry was inserted
    created_at: Instant,
    /// The raw response bytes
    value: Vec<u8>,
}

type EntryMap = HashMap<String, CacheEntry>;

/// Time-expiring byte cache shared between the command handlers and one
/// background reaper task.
///
/// Eviction is sweep-based, not a precise TTL: the reaper wakes once per
/// interval and removes entries whose age exceeds the interval, so an entry
/// inserted right after a sweep can live until just before the sweep after
/// next (up to roughly twice the interval). `get` performs no expiry check
/// of its own; an entry is live until a sweep removes it.
///
/// Cloning the handle is cheap and every clone refers to the same underlying
/// map. Construction spawns the reaper task, so `Cache::new` must be called
/// from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct Cache {
    /// Shared map guarded by a single coarse lock
    entries: Arc<Mutex<EntryMap>>,
    /// Sweep period and eviction threshold, fixed at construction
    interval: Duration,
    /// Handle to the reaper task, used by `shutdown`
    reaper: Arc<JoinHandle<()>>,
}

impl Cache {
    /// Creates an empty cache and starts its background reaper.
    ///
    /// # Arguments
    /// * `interval` - Sweep period and eviction age threshold; must be positive
    pub fn new(interval: Duration) -> Self {
        let entries = Arc::new(Mutex::new(EntryMap::new()));
        let reaper = spawn_reap_loop(Arc::clone(&entries), interval);

        Self {
            entries,
            interval,
            reaper: Arc::new(reaper),
        }
    }

    /// Returns the eviction interval this cache was constructed with
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Records `value` under `key`, overwriting any existing entry.
    ///
    /// Re-insertion under an existing key resets both the value and the
    /// insertion timestamp. The timestamp is captured before the lock is
    /// taken; the lock is held only for the map mutation.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let entry = CacheEntry {
            created_at: Instant::now(),
            value,
        };
        self.entries.lock().await.insert(key.into(), entry);
    }

    /// Looks up the bytes stored under `key`.
    ///
    /// Returns `None` both for keys never inserted and for keys already
    /// swept by the reaper; callers cannot tell the two apart. Read-only:
    /// a stale entry the reaper has not reached yet is still returned.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().await.get(key).map(|entry| entry.value.clone())
    }

    /// Returns the number of entries currently in the map
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Returns `true` if the map holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    /// Stops the background reaper task.
    ///
    /// After shutdown no further sweeps run; existing entries stay in the
    /// map until the cache is dropped. Used for deterministic test teardown
    /// and on process exit.
    pub fn shutdown(&self) {
        self.reaper.abort();
    }
}

/// Spawns the reaper task for one cache instance.
///
/// The task sleeps for one full interval before its first sweep, then
/// sweeps once per interval: under the lock it captures the current time
/// and removes every entry older than the interval. The sweep touches only
/// the in-memory map; it never blocks on anything but the lock.
fn spawn_reap_loop(entries: Arc<Mutex<EntryMap>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;

            let mut entries = entries.lock().await;
            let now = Instant::now();
            let before = entries.len();
            entries.retain(|_, entry| now.duration_since(entry.created_at) <= interval);

            let removed = before - entries.len();
            if removed > 0 {
                debug!(removed, "cache sweep evicted stale entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_overwrite_last_write_wins() {
        let cache = Cache::new(Duration::from_secs(60));

        cache.add("key", b"first".to_vec()).await;
        cache.add("key", b"second".to_vec()).await;

        assert_eq!(cache.get("key").await, Some(b"second".to_vec()));
        assert_eq!(cache.len().await, 1);
        cache.shutdown();
    }

    #[tokio::test]
    async fn test_get_returns_none_for_missing_key() {
        let cache = Cache::new(Duration::from_secs(60));

        assert_eq!(cache.get("never-inserted").await, None);
        cache.shutdown();
    }

    #[tokio::test]
    async fn test_entry_is_live_before_first_sweep() {
        let cache = Cache::new(Duration::from_millis(100));

        cache.add("x", b"abc".to_vec()).await;

        assert_eq!(cache.get("x").await, Some(b"abc".to_vec()));
        cache.shutdown();
    }

    #[tokio::test]
    async fn test_entry_is_evicted_after_sweeps() {
        let cache = Cache::new(Duration::from_millis(20));

        cache.add("x", b"abc".to_vec()).await;
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(cache.get("x").await, None);
        cache.shutdown();
    }

    #[tokio::test]
    async fn test_overwrite_resets_insertion_time() {
        let cache = Cache::new(Duration::from_millis(50));

        cache.add("x", b"old".to_vec()).await;
        tokio::time::sleep(Duration::from_millis(35)).await;
        cache.add("x", b"new".to_vec()).await;
        tokio::time::sleep(Duration::from_millis(35)).await;

        // The original insertion is now past the interval, but the
        // overwrite restarted the clock.
        assert_eq!(cache.get("x").await, Some(b"new".to_vec()));
        cache.shutdown();
    }

    #[tokio::test]
    async fn test_concurrent_writers_readers_and_reaper() {
        const WRITERS: usize = 4;
        const READERS: usize = 2;
        const WRITES_PER_TASK: usize = 1000;

        let cache = Cache::new(Duration::from_millis(10));
        let mut tasks = Vec::new();

        for writer in 0..WRITERS {
            let cache = cache.clone();
            tasks.push(tokio::spawn(async move {
                for i in 0..WRITES_PER_TASK {
                    let key = format!("w{}-{}", writer, i);
                    cache.add(key.clone(), key.into_bytes()).await;
                }
            }));
        }

        for reader in 0..READERS {
            let cache = cache.clone();
            tasks.push(tokio::spawn(async move {
                for i in 0..WRITES_PER_TASK {
                    let key = format!("w{}-{}", reader, i);
                    let _ = cache.get(&key).await;
                }
            }));
        }

        for task in tasks {
            task.await.expect("task should not panic");
        }

        // The reaper may have swept older keys, but any key still present
        // must map to exactly the bytes its writer stored.
        for writer in 0..WRITERS {
            for i in 0..WRITES_PER_TASK {
                let key = format!("w{}-{}", writer, i);
                if let Some(value) = cache.get(&key).await {
                    assert_eq!(value, key.as_bytes());
                }
            }
        }
        cache.shutdown();
    }

    #[tokio::test]
    async fn test_instances_evict_independently() {
        let short = Cache::new(Duration::from_millis(25));
        let long = Cache::new(Duration::from_secs(10));

        short.add("shared", b"short-lived".to_vec()).await;
        long.add("shared", b"long-lived".to_vec()).await;

        tokio::time::sleep(Duration::from_millis(80)).await;

        assert_eq!(short.get("shared").await, None);
        assert_eq!(long.get("shared").await, Some(b"long-lived".to_vec()));
        short.shutdown();
        long.shutdown();
    }

    #[tokio::test]
    async fn test_clones_share_the_same_map() {
        let cache = Cache::new(Duration::from_secs(60));
        let clone = cache.clone();

        cache.add("key", b"value".to_vec()).await;

        assert_eq!(clone.get("key").await, Some(b"value".to_vec()));
        assert_eq!(clone.interval(), Duration::from_secs(60));
        cache.shutdown();
    }

    #[tokio::test]
    async fn test_shutdown_stops_the_reaper() {
        let cache = Cache::new(Duration::from_millis(20));

        cache.add("x", b"abc".to_vec()).await;
        cache.shutdown();
        tokio::time::sleep(Duration::from_millis(80)).await;

        // No sweep ran after shutdown, so the stale entry is still there.
        assert_eq!(cache.get("x").await, Some(b"abc".to_vec()));
    }
}
