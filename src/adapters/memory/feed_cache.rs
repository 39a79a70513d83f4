//! Process-local feed snapshot cache using moka.
//!
//! Each entry expires after the TTL it was stored with. Snapshots are not
//! shared between processes.

use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Post;
use crate::domain::ports::FeedCache;

/// Maximum number of cached snapshot keys.
const SNAPSHOT_CACHE_MAX_CAPACITY: u64 = 64;

#[derive(Clone)]
struct CachedSnapshot {
    posts: Arc<Vec<Post>>,
    ttl: Duration,
}

/// Expires entries by the TTL they were written with, restarting on overwrite.
struct SnapshotExpiry;

impl Expiry<String, CachedSnapshot> for SnapshotExpiry {
    fn expire_after_create(&self, _key: &String, value: &CachedSnapshot, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedSnapshot,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

pub struct InMemoryFeedCache {
    snapshots: Cache<String, CachedSnapshot>,
    unavailable: AtomicBool,
}

impl InMemoryFeedCache {
    pub fn new() -> Self {
        let snapshots = Cache::builder()
            .max_capacity(SNAPSHOT_CACHE_MAX_CAPACITY)
            .expire_after(SnapshotExpiry)
            .build();

        Self {
            snapshots,
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail, as an unreachable cache server would.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> DomainResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError("feed cache unavailable".to_string()));
        }
        Ok(())
    }
}

impl Default for InMemoryFeedCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedCache for InMemoryFeedCache {
    async fn get(&self, key: &str) -> DomainResult<Option<Vec<Post>>> {
        self.check_available()?;
        Ok(self.snapshots.get(key).await.map(|cached| (*cached.posts).clone()))
    }

    async fn put(&self, key: &str, posts: &[Post], ttl: Duration) -> DomainResult<()> {
        self.check_available()?;
        let snapshot = CachedSnapshot {
            posts: Arc::new(posts.to_vec()),
            ttl,
        };
        self.snapshots.insert(key.to_string(), snapshot).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(id: i64) -> Post {
        Post {
            id,
            author_id: 1,
            body: format!("body {id}"),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = InMemoryFeedCache::new();
        cache.put("feed", &[post(1), post(2)], Duration::from_secs(30)).await.unwrap();

        let cached = cache.get("feed").await.unwrap().unwrap();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].id, 1);
        assert!(cache.get("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let cache = InMemoryFeedCache::new();
        cache.put("feed", &[post(1)], Duration::from_millis(50)).await.unwrap();
        assert!(cache.get("feed").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(cache.get("feed").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_snapshot() {
        let cache = InMemoryFeedCache::new();
        cache.put("feed", &[post(1)], Duration::from_secs(30)).await.unwrap();
        cache.put("feed", &[post(2), post(3)], Duration::from_secs(30)).await.unwrap();

        let cached = cache.get("feed").await.unwrap().unwrap();
        assert_eq!(cached.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[tokio::test]
    async fn test_unavailable_cache_errors() {
        let cache = InMemoryFeedCache::new();
        cache.set_unavailable(true);

        assert!(cache.get("feed").await.is_err());
        assert!(cache.put("feed", &[], Duration::from_secs(1)).await.is_err());
    }
}
