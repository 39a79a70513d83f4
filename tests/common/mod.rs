//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use postfeed::adapters::memory::{InMemoryFeedCache, InMemoryLikeStore, RecordingLikeMetrics};
use postfeed::adapters::sqlite::{create_migrated_test_pool, SqlitePostRepository};
use postfeed::domain::models::{NewPost, Page, Post, PostId};
use postfeed::domain::ports::PostRepository;
use postfeed::{DomainResult, FeedService};

/// Wraps a repository and counts listing queries.
pub struct CountingPostRepository {
    inner: SqlitePostRepository,
    list_calls: AtomicUsize,
}

impl CountingPostRepository {
    pub fn new(inner: SqlitePostRepository) -> Self {
        Self {
            inner,
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostRepository for CountingPostRepository {
    async fn list_recent(&self, page: Page) -> DomainResult<Vec<Post>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_recent(page).await
    }

    async fn create(&self, post: NewPost) -> DomainResult<Post> {
        self.inner.create(post).await
    }

    async fn get(&self, id: PostId) -> DomainResult<Option<Post>> {
        self.inner.get(id).await
    }

    async fn update_body(&self, id: PostId, body: &str) -> DomainResult<Post> {
        self.inner.update_body(id, body).await
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}

/// A feed service over an in-memory database and cache tier, with handles
/// to every store for inspection.
pub struct TestFeed {
    pub service: FeedService,
    pub posts: Arc<CountingPostRepository>,
    pub likes: Arc<InMemoryLikeStore>,
    pub cache: Arc<InMemoryFeedCache>,
    pub metrics: Arc<RecordingLikeMetrics>,
}

pub async fn setup_feed() -> TestFeed {
    setup_feed_with_ttl(Duration::from_secs(30)).await
}

pub async fn setup_feed_with_ttl(ttl: Duration) -> TestFeed {
    let pool = create_migrated_test_pool().await.expect("Failed to create test pool");
    let posts = Arc::new(CountingPostRepository::new(SqlitePostRepository::new(pool)));
    let likes = Arc::new(InMemoryLikeStore::new());
    let cache = Arc::new(InMemoryFeedCache::new());
    let metrics = Arc::new(RecordingLikeMetrics::new());

    let service = FeedService::new(posts.clone(), cache.clone(), likes.clone(), metrics.clone())
        .with_snapshot_ttl(ttl);

    TestFeed {
        service,
        posts,
        likes,
        cache,
        metrics,
    }
}
