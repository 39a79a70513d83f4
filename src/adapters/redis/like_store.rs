//! Redis-backed like sets.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ActorId, LikeSummary, PostId};
use crate::domain::ports::LikeStore;

const LIKE_KEY_PREFIX: &str = "post:likes:";

/// Key of the like set for a post.
pub fn like_key(post_id: PostId) -> String {
    format!("{LIKE_KEY_PREFIX}{post_id}")
}

/// One Redis set per post, members are actor ids.
#[derive(Clone)]
pub struct RedisLikeStore {
    connection: MultiplexedConnection,
}

impl RedisLikeStore {
    pub fn new(connection: MultiplexedConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl LikeStore for RedisLikeStore {
    async fn add_member(&self, post_id: PostId, actor: &ActorId) -> DomainResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.sadd(like_key(post_id), actor.as_str()).await?;
        Ok(())
    }

    async fn remove_member(&self, post_id: PostId, actor: &ActorId) -> DomainResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.srem(like_key(post_id), actor.as_str()).await?;
        Ok(())
    }

    async fn cardinality(&self, post_id: PostId) -> DomainResult<u64> {
        let mut conn = self.connection.clone();
        Ok(conn.scard(like_key(post_id)).await?)
    }

    async fn is_member(&self, post_id: PostId, actor: &ActorId) -> DomainResult<bool> {
        let mut conn = self.connection.clone();
        Ok(conn.sismember(like_key(post_id), actor.as_str()).await?)
    }

    async fn delete_set(&self, post_id: PostId) -> DomainResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.del(like_key(post_id)).await?;
        Ok(())
    }

    async fn fetch_batch(
        &self,
        post_ids: &[PostId],
        actor: Option<&ActorId>,
    ) -> DomainResult<Vec<LikeSummary>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut pipe = redis::pipe();
        for &post_id in post_ids {
            let key = like_key(post_id);
            pipe.scard(&key);
            if let Some(actor) = actor {
                pipe.sismember(&key, actor.as_str());
            }
        }

        let mut conn = self.connection.clone();
        let replies: Vec<u64> = pipe.query_async(&mut conn).await?;
        decode_batch(&replies, post_ids.len(), actor.is_some())
    }
}

/// Split pipelined integer replies back into per-post summaries.
///
/// With an actor each post contributes `SCARD` then `SISMEMBER`.
fn decode_batch(replies: &[u64], posts: usize, with_membership: bool) -> DomainResult<Vec<LikeSummary>> {
    let stride = if with_membership { 2 } else { 1 };
    if replies.len() != posts * stride {
        return Err(DomainError::CacheError(format!(
            "like batch returned {} replies for {posts} posts",
            replies.len()
        )));
    }

    Ok(replies
        .chunks(stride)
        .map(|reply| LikeSummary::new(reply[0], with_membership && reply[1] == 1))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_key_format() {
        assert_eq!(like_key(15), "post:likes:15");
    }

    #[test]
    fn test_decode_counts_only() {
        let summaries = decode_batch(&[3, 0, 7], 3, false).unwrap();
        assert_eq!(
            summaries,
            vec![LikeSummary::new(3, false), LikeSummary::new(0, false), LikeSummary::new(7, false)]
        );
    }

    #[test]
    fn test_decode_with_membership() {
        let summaries = decode_batch(&[2, 1, 5, 0], 2, true).unwrap();
        assert_eq!(summaries, vec![LikeSummary::new(2, true), LikeSummary::new(5, false)]);
    }

    #[test]
    fn test_short_reply_fails_whole_batch() {
        let err = decode_batch(&[2, 1, 5], 2, true).unwrap_err();
        assert!(matches!(err, DomainError::CacheError(_)));
    }
}
