//! Feed snapshot cache port.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::errors::DomainResult;
use crate::domain::models::Post;

/// Key/value cache holding serialized feed snapshots.
///
/// Implementations self-expire entries after the TTL given to `put`.
#[async_trait]
pub trait FeedCache: Send + Sync {
    /// `Ok(None)` on a miss. Decode failures are reported as errors.
    async fn get(&self, key: &str) -> DomainResult<Option<Vec<Post>>>;

    async fn put(&self, key: &str, posts: &[Post], ttl: Duration) -> DomainResult<()>;
}
