//! Like and unlike writes against the like store.
//!
//! Likes are social signal, not durable data. Under the default
//! [`WriteMode::BestEffort`] a failed write is logged and the caller still
//! sees success; the write is always attempted before returning.

use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ActorId, PostId, WriteMode};
use crate::domain::ports::LikeStore;

pub struct LikeTracker {
    store: Arc<dyn LikeStore>,
    write_mode: WriteMode,
}

impl LikeTracker {
    pub fn new(store: Arc<dyn LikeStore>) -> Self {
        Self {
            store,
            write_mode: WriteMode::default(),
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub const fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Record that `actor` likes the post. The post's existence is not checked.
    pub async fn like(&self, post_id: PostId, actor: &ActorId) -> DomainResult<()> {
        let result = self.store.add_member(post_id, actor).await;
        self.settle("like", post_id, result)
    }

    pub async fn unlike(&self, post_id: PostId, actor: &ActorId) -> DomainResult<()> {
        let result = self.store.remove_member(post_id, actor).await;
        self.settle("unlike", post_id, result)
    }

    /// Drop the like set of a deleted post. Always best-effort: a failure
    /// leaves an orphaned set behind.
    pub async fn forget_post(&self, post_id: PostId) {
        if let Err(err) = self.store.delete_set(post_id).await {
            tracing::warn!(post_id, error = %err, "failed to delete like set, leaving orphan");
        }
    }

    fn settle(&self, operation: &'static str, post_id: PostId, result: DomainResult<()>) -> DomainResult<()> {
        match (result, self.write_mode) {
            (Ok(()), _) => Ok(()),
            (Err(err), WriteMode::BestEffort) => {
                tracing::warn!(operation, post_id, error = %err, "like store write failed, ignoring");
                Ok(())
            }
            (Err(err), WriteMode::Confirmed) => Err(err),
        }
    }
}
