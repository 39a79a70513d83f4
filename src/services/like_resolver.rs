//! Batched like lookups for a page of posts.
//!
//! A page of N posts needs N cardinality reads and up to N membership reads.
//! They are all sent to the like store as one batch, so the added latency is
//! one round trip regardless of page size.

use std::sync::Arc;
use std::time::Instant;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ActorId, LikeSummary, Post, PostId};
use crate::domain::ports::{LikeLookupMetrics, LikeStore, NoopLikeMetrics};

pub struct BatchLikeResolver {
    store: Arc<dyn LikeStore>,
    metrics: Arc<dyn LikeLookupMetrics>,
}

impl BatchLikeResolver {
    pub fn new(store: Arc<dyn LikeStore>, metrics: Arc<dyn LikeLookupMetrics>) -> Self {
        Self { store, metrics }
    }

    /// Resolver that records no metrics.
    pub fn without_metrics(store: Arc<dyn LikeStore>) -> Self {
        Self::new(store, Arc::new(NoopLikeMetrics))
    }

    /// Like count and membership for each post, aligned with `posts`.
    ///
    /// Without an actor no membership is requested and every
    /// `liked_by_actor` is false. Any failure fails the whole batch.
    pub async fn resolve(&self, posts: &[Post], actor: Option<&ActorId>) -> DomainResult<Vec<LikeSummary>> {
        let post_ids: Vec<PostId> = posts.iter().map(|post| post.id).collect();

        tracing::debug!(posts = post_ids.len(), with_actor = actor.is_some(), "like batch start");
        let start = Instant::now();
        let result = self.store.fetch_batch(&post_ids, actor).await;
        let duration = start.elapsed();

        self.metrics.observe_batch(post_ids.len(), duration, result.is_ok());

        match &result {
            Ok(_) => {
                tracing::debug!(posts = post_ids.len(), duration_ms = duration.as_secs_f64() * 1000.0, "like batch end");
            }
            Err(err) => {
                tracing::error!(
                    posts = post_ids.len(),
                    duration_ms = duration.as_secs_f64() * 1000.0,
                    error = %err,
                    "like batch failed"
                );
            }
        }

        result
    }
}
