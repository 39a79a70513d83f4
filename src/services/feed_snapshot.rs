//! Read-through snapshot of the canonical first feed page.
//!
//! Only the canonical shape (default limit, zero offset) is ever read from or
//! written to the cache, which keeps the key space to a single entry. Every
//! cache failure is treated as a miss. Nothing invalidates the snapshot on
//! writes, so the canonical page may lag the durable store by up to one TTL.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::models::{Page, Post, DEFAULT_PAGE_LIMIT};
use crate::domain::ports::FeedCache;

/// Cache key of the canonical feed snapshot.
pub const FEED_SNAPSHOT_KEY: &str = "main:feed";

/// Default snapshot lifetime.
pub const DEFAULT_SNAPSHOT_TTL: Duration = Duration::from_secs(30);

pub struct FeedSnapshotCache {
    cache: Arc<dyn FeedCache>,
    ttl: Duration,
    canonical_limit: u32,
}

impl FeedSnapshotCache {
    pub fn new(cache: Arc<dyn FeedCache>) -> Self {
        Self {
            cache,
            ttl: DEFAULT_SNAPSHOT_TTL,
            canonical_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_canonical_limit(mut self, limit: u32) -> Self {
        self.canonical_limit = limit;
        self
    }

    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Whether a page is eligible for snapshot caching.
    pub const fn is_canonical(&self, page: Page) -> bool {
        page.limit == self.canonical_limit && page.offset == 0
    }

    /// Cached posts for a canonical page. `None` on miss, error, or a
    /// non-canonical page.
    pub async fn lookup(&self, page: Page) -> Option<Vec<Post>> {
        if !self.is_canonical(page) {
            return None;
        }

        match self.cache.get(FEED_SNAPSHOT_KEY).await {
            Ok(Some(posts)) => {
                tracing::debug!(posts = posts.len(), "feed snapshot hit");
                Some(posts)
            }
            Ok(None) => {
                tracing::debug!("feed snapshot miss");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "feed snapshot read failed, falling back to store");
                None
            }
        }
    }

    /// Write back a freshly read canonical page. Non-canonical pages are ignored.
    pub async fn store(&self, page: Page, posts: &[Post]) {
        if !self.is_canonical(page) {
            return;
        }

        if let Err(err) = self.cache.put(FEED_SNAPSHOT_KEY, posts, self.ttl).await {
            tracing::warn!(error = %err, "feed snapshot write failed");
        }
    }
}
