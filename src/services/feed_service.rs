//! Feed assembly: the operations exposed to transports.
//!
//! Post fields come from the durable store, or from the snapshot cache for
//! the canonical first page. Like data always comes live from the like
//! store. The two stores are never updated together: creates, edits and
//! deletes do not touch the snapshot, so the canonical page can be stale by
//! up to one snapshot TTL.

use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    ActorId, CacheConfig, LikeReadPolicy, LikeSummary, LikesConfig, NewPost, Page, Post, PostId,
    PostView, RequestContext, WriteMode,
};
use crate::domain::ports::{FeedCache, LikeLookupMetrics, LikeStore, PostRepository};
use crate::services::feed_snapshot::FeedSnapshotCache;
use crate::services::like_resolver::BatchLikeResolver;
use crate::services::like_tracker::LikeTracker;

pub struct FeedService {
    posts: Arc<dyn PostRepository>,
    like_store: Arc<dyn LikeStore>,
    snapshots: FeedSnapshotCache,
    resolver: BatchLikeResolver,
    likes: LikeTracker,
    read_failure: LikeReadPolicy,
}

impl FeedService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        feed_cache: Arc<dyn FeedCache>,
        like_store: Arc<dyn LikeStore>,
        metrics: Arc<dyn LikeLookupMetrics>,
    ) -> Self {
        Self {
            posts,
            snapshots: FeedSnapshotCache::new(feed_cache),
            resolver: BatchLikeResolver::new(like_store.clone(), metrics),
            likes: LikeTracker::new(like_store.clone()),
            like_store,
            read_failure: LikeReadPolicy::default(),
        }
    }

    /// Apply cache and like settings from configuration.
    pub fn configured(self, cache: &CacheConfig, likes: &LikesConfig) -> Self {
        self.with_snapshot_ttl(cache.feed_ttl())
            .with_canonical_limit(cache.canonical_limit)
            .with_write_mode(likes.write_mode)
            .with_like_read_policy(likes.read_failure)
    }

    pub fn with_snapshot_ttl(mut self, ttl: Duration) -> Self {
        self.snapshots = self.snapshots.with_ttl(ttl);
        self
    }

    pub fn with_canonical_limit(mut self, limit: u32) -> Self {
        self.snapshots = self.snapshots.with_canonical_limit(limit);
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.likes = self.likes.with_write_mode(write_mode);
        self
    }

    pub fn with_like_read_policy(mut self, policy: LikeReadPolicy) -> Self {
        self.read_failure = policy;
        self
    }

    /// List posts newest first with live like data.
    ///
    /// The canonical first page may be served from a snapshot up to one TTL
    /// old: recently created posts can be missing and edited bodies can show
    /// their previous text. Like counts are never stale.
    #[instrument(skip(self, ctx), fields(limit = page.limit, offset = page.offset, actor = ?ctx.actor))]
    pub async fn list_posts(&self, ctx: &RequestContext, page: Page) -> DomainResult<Vec<PostView>> {
        let posts = match self.snapshots.lookup(page).await {
            Some(posts) => posts,
            None => {
                let posts = self.posts.list_recent(page).await?;
                self.snapshots.store(page, &posts).await;
                posts
            }
        };

        let likes = match self.resolver.resolve(&posts, ctx.actor()).await {
            Ok(likes) => likes,
            Err(err) => self.on_like_read_failure(err, posts.len())?,
        };

        Ok(posts
            .into_iter()
            .zip(likes)
            .map(|(post, likes)| PostView::from_parts(post, likes))
            .collect())
    }

    /// Fetch one post with live like data.
    #[instrument(skip(self, ctx), fields(actor = ?ctx.actor))]
    pub async fn get_post(&self, ctx: &RequestContext, id: PostId) -> DomainResult<PostView> {
        let post = self.posts.get(id).await?.ok_or(DomainError::PostNotFound(id))?;

        let likes = match self.single_post_likes(id, ctx.actor()).await {
            Ok(likes) => likes,
            Err(err) => self.on_like_read_failure(err, 1)?.remove(0),
        };

        Ok(PostView::from_parts(post, likes))
    }

    /// Create a post authored by the request's actor. A new post has no likes.
    #[instrument(skip(self, ctx, body), fields(actor = ?ctx.actor))]
    pub async fn create_post(&self, ctx: &RequestContext, body: &str) -> DomainResult<PostView> {
        let post = self.posts.create(NewPost::new(ctx.author_id(), body)).await?;
        tracing::info!(post_id = post.id, author_id = post.author_id, "post created");
        Ok(PostView::from_parts(post, LikeSummary::default()))
    }

    /// Replace a post's body and return it with live like data.
    ///
    /// Like read failures here always degrade to zero counts, since the edit
    /// itself has already been committed.
    #[instrument(skip(self, ctx, body), fields(actor = ?ctx.actor))]
    pub async fn edit_post(&self, ctx: &RequestContext, id: PostId, body: &str) -> DomainResult<PostView> {
        let post: Post = self.posts.update_body(id, body).await?;
        tracing::info!(post_id = id, "post edited");

        let likes = self.single_post_likes(id, ctx.actor()).await.unwrap_or_else(|err| {
            tracing::warn!(post_id = id, error = %err, "like lookup failed after edit");
            LikeSummary::default()
        });

        Ok(PostView::from_parts(post, likes))
    }

    /// Delete a post and, best-effort, its like set.
    #[instrument(skip(self, _ctx))]
    pub async fn delete_post(&self, _ctx: &RequestContext, id: PostId) -> DomainResult<()> {
        self.posts.delete(id).await?;
        tracing::info!(post_id = id, "post deleted");
        self.likes.forget_post(id).await;
        Ok(())
    }

    /// Like a post as the request's actor. Without an actor this reports
    /// success and does nothing. The post's existence is not checked, so
    /// liking a deleted id leaves an orphaned like set.
    #[instrument(skip(self, ctx), fields(actor = ?ctx.actor))]
    pub async fn like_post(&self, ctx: &RequestContext, id: PostId) -> DomainResult<()> {
        match ctx.actor() {
            Some(actor) => self.likes.like(id, actor).await,
            None => {
                tracing::debug!(post_id = id, "like without actor ignored");
                Ok(())
            }
        }
    }

    /// Counterpart of [`Self::like_post`], with the same actor rules.
    #[instrument(skip(self, ctx), fields(actor = ?ctx.actor))]
    pub async fn unlike_post(&self, ctx: &RequestContext, id: PostId) -> DomainResult<()> {
        match ctx.actor() {
            Some(actor) => self.likes.unlike(id, actor).await,
            None => {
                tracing::debug!(post_id = id, "unlike without actor ignored");
                Ok(())
            }
        }
    }

    async fn single_post_likes(&self, id: PostId, actor: Option<&ActorId>) -> DomainResult<LikeSummary> {
        let count = self.like_store.cardinality(id).await?;
        let liked_by_actor = match actor {
            Some(actor) => self.like_store.is_member(id, actor).await?,
            None => false,
        };
        Ok(LikeSummary::new(count, liked_by_actor))
    }

    fn on_like_read_failure(&self, err: DomainError, posts: usize) -> DomainResult<Vec<LikeSummary>> {
        match self.read_failure {
            LikeReadPolicy::Degrade => {
                tracing::warn!(error = %err, posts, "like lookup failed, returning zero counts");
                Ok(vec![LikeSummary::default(); posts])
            }
            LikeReadPolicy::Fail => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryFeedCache, InMemoryLikeStore};
    use crate::adapters::sqlite::{create_migrated_test_pool, SqlitePostRepository};
    use crate::domain::ports::NoopLikeMetrics;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Snapshot store whose payload never decodes.
    #[derive(Default)]
    struct CorruptFeedCache {
        reads: AtomicUsize,
    }

    #[async_trait]
    impl FeedCache for CorruptFeedCache {
        async fn get(&self, _key: &str) -> DomainResult<Option<Vec<Post>>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Err(DomainError::SerializationError("expected value at line 1 column 1".to_string()))
        }

        async fn put(&self, _key: &str, _posts: &[Post], _ttl: Duration) -> DomainResult<()> {
            Ok(())
        }
    }

    struct Fixture {
        service: FeedService,
        likes: Arc<InMemoryLikeStore>,
    }

    async fn setup_service() -> Fixture {
        let pool = create_migrated_test_pool().await.unwrap();
        let likes = Arc::new(InMemoryLikeStore::new());
        let service = FeedService::new(
            Arc::new(SqlitePostRepository::new(pool)),
            Arc::new(InMemoryFeedCache::new()),
            likes.clone(),
            Arc::new(NoopLikeMetrics),
        );
        Fixture { service, likes }
    }

    #[tokio::test]
    async fn test_create_has_zero_likes() {
        let fx = setup_service().await;
        let ctx = RequestContext::for_actor("42");

        let post = fx.service.create_post(&ctx, "hello").await.unwrap();
        assert_eq!(post.body, "hello");
        assert_eq!(post.author_id, 42);
        assert_eq!(post.like_count, 0);
        assert!(!post.liked_by_actor);
    }

    #[tokio::test]
    async fn test_anonymous_create_uses_author_zero() {
        let fx = setup_service().await;
        let post = fx.service.create_post(&RequestContext::anonymous(), "anon").await.unwrap();
        assert_eq!(post.author_id, 0);
    }

    #[tokio::test]
    async fn test_edit_returns_live_likes() {
        let fx = setup_service().await;
        let ctx = RequestContext::for_actor("42");
        let post = fx.service.create_post(&ctx, "draft").await.unwrap();
        fx.service.like_post(&ctx, post.id).await.unwrap();

        let edited = fx.service.edit_post(&ctx, post.id, "final").await.unwrap();
        assert_eq!(edited.id, post.id);
        assert_eq!(edited.body, "final");
        assert_eq!(edited.like_count, 1);
        assert!(edited.liked_by_actor);
    }

    #[tokio::test]
    async fn test_edit_degrades_when_like_store_fails() {
        let fx = setup_service().await;
        let ctx = RequestContext::for_actor("42");
        let post = fx.service.create_post(&ctx, "draft").await.unwrap();
        fx.service.like_post(&ctx, post.id).await.unwrap();

        fx.likes.set_fail_reads(true);
        let edited = fx.service.edit_post(&ctx, post.id, "final").await.unwrap();
        assert_eq!(edited.body, "final");
        assert_eq!(edited.like_count, 0);
    }

    #[tokio::test]
    async fn test_edit_missing_post() {
        let fx = setup_service().await;
        let err = fx
            .service
            .edit_post(&RequestContext::anonymous(), 404, "x")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound(404)));
    }

    #[tokio::test]
    async fn test_get_post() {
        let fx = setup_service().await;
        let ctx = RequestContext::for_actor("5");
        let post = fx.service.create_post(&ctx, "one").await.unwrap();
        fx.service.like_post(&ctx, post.id).await.unwrap();

        let fetched = fx.service.get_post(&RequestContext::anonymous(), post.id).await.unwrap();
        assert_eq!(fetched.like_count, 1);
        assert!(!fetched.liked_by_actor);

        let err = fx.service.get_post(&ctx, post.id + 1).await.unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound(_)));
    }

    #[tokio::test]
    async fn test_get_post_respects_fail_policy() {
        let fx = setup_service().await;
        let service = fx.service.with_like_read_policy(LikeReadPolicy::Fail);
        let post = service.create_post(&RequestContext::anonymous(), "one").await.unwrap();

        fx.likes.set_fail_reads(true);
        let err = service.get_post(&RequestContext::anonymous(), post.id).await.unwrap_err();
        assert!(err.is_cache_error());
    }

    #[tokio::test]
    async fn test_like_without_actor_is_noop() {
        let fx = setup_service().await;
        let post = fx.service.create_post(&RequestContext::anonymous(), "x").await.unwrap();
        let before = fx.likes.round_trips();

        fx.service.like_post(&RequestContext::anonymous(), post.id).await.unwrap();
        fx.service.unlike_post(&RequestContext::anonymous(), post.id).await.unwrap();

        assert_eq!(fx.likes.round_trips(), before);
        assert!(!fx.likes.has_set(post.id).await);
    }

    #[tokio::test]
    async fn test_list_degrades_by_default() {
        let fx = setup_service().await;
        let ctx = RequestContext::for_actor("1");
        let post = fx.service.create_post(&ctx, "x").await.unwrap();
        fx.service.like_post(&ctx, post.id).await.unwrap();

        fx.likes.set_fail_reads(true);
        let views = fx.service.list_posts(&ctx, Page::first()).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].like_count, 0);
        assert!(!views[0].liked_by_actor);
    }

    #[tokio::test]
    async fn test_list_fails_under_fail_policy() {
        let fx = setup_service().await;
        let service = fx.service.with_like_read_policy(LikeReadPolicy::Fail);
        service.create_post(&RequestContext::anonymous(), "x").await.unwrap();

        fx.likes.set_fail_reads(true);
        let err = service
            .list_posts(&RequestContext::anonymous(), Page::first())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::CacheError(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_post_and_likes() {
        let fx = setup_service().await;
        let ctx = RequestContext::for_actor("9");
        let post = fx.service.create_post(&ctx, "gone soon").await.unwrap();
        fx.service.like_post(&ctx, post.id).await.unwrap();
        assert!(fx.likes.has_set(post.id).await);

        fx.service.delete_post(&ctx, post.id).await.unwrap();
        assert!(!fx.likes.has_set(post.id).await);

        let err = fx.service.delete_post(&ctx, post.id).await.unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_succeeds_when_like_set_cannot_be_removed() {
        let fx = setup_service().await;
        let ctx = RequestContext::for_actor("9");
        let post = fx.service.create_post(&ctx, "x").await.unwrap();
        fx.service.like_post(&ctx, post.id).await.unwrap();

        fx.likes.set_fail_writes(true);
        fx.service.delete_post(&ctx, post.id).await.unwrap();
        assert!(fx.likes.has_set(post.id).await);
    }

    #[tokio::test]
    async fn test_list_falls_back_to_store_on_undecodable_snapshot() {
        let pool = create_migrated_test_pool().await.unwrap();
        let cache = Arc::new(CorruptFeedCache::default());
        let service = FeedService::new(
            Arc::new(SqlitePostRepository::new(pool)),
            cache.clone(),
            Arc::new(InMemoryLikeStore::new()),
            Arc::new(NoopLikeMetrics),
        );
        let ctx = RequestContext::for_actor("42");
        let post = service.create_post(&ctx, "fresh from the store").await.unwrap();

        let views = service.list_posts(&ctx, Page::first()).await.unwrap();
        assert_eq!(cache.reads.load(Ordering::SeqCst), 1);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, post.id);
        assert_eq!(views[0].body, "fresh from the store");
    }
}
