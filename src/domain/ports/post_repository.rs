//! Durable post store port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{NewPost, Page, Post, PostId};

/// Repository interface for post persistence.
///
/// Every failure is fatal to the calling request; the core never retries.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List posts newest first.
    async fn list_recent(&self, page: Page) -> DomainResult<Vec<Post>>;

    /// Insert a post and return it with its assigned id.
    async fn create(&self, post: NewPost) -> DomainResult<Post>;

    /// Get a post by ID.
    async fn get(&self, id: PostId) -> DomainResult<Option<Post>>;

    /// Replace the body of a post. Fails with `PostNotFound` if absent.
    async fn update_body(&self, id: PostId, body: &str) -> DomainResult<Post>;

    /// Delete a post. Fails with `PostNotFound` if absent.
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}
