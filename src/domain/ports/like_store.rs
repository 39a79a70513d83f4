//! Like tracking store port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ActorId, LikeSummary, PostId};

/// Set-per-post store of the actors who liked each post.
///
/// There is no durable copy: if the backing cache loses a set, those likes
/// are gone.
#[async_trait]
pub trait LikeStore: Send + Sync {
    /// Add an actor to the post's set. Adding a present member is a no-op.
    async fn add_member(&self, post_id: PostId, actor: &ActorId) -> DomainResult<()>;

    /// Remove an actor from the post's set. Removing an absent member is a no-op.
    async fn remove_member(&self, post_id: PostId, actor: &ActorId) -> DomainResult<()>;

    async fn cardinality(&self, post_id: PostId) -> DomainResult<u64>;

    async fn is_member(&self, post_id: PostId, actor: &ActorId) -> DomainResult<bool>;

    /// Drop the whole set for a post.
    async fn delete_set(&self, post_id: PostId) -> DomainResult<()>;

    /// Cardinality, and membership when `actor` is given, for every post in
    /// one round trip. The result is aligned with `post_ids`.
    ///
    /// Any sub-command failure fails the whole batch.
    async fn fetch_batch(
        &self,
        post_ids: &[PostId],
        actor: Option<&ActorId>,
    ) -> DomainResult<Vec<LikeSummary>>;
}
