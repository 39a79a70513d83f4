//! Redis-backed feed snapshot cache.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::time::Duration;

use crate::domain::errors::DomainResult;
use crate::domain::models::Post;
use crate::domain::ports::FeedCache;

/// Stores snapshots as JSON strings with a millisecond expiry.
#[derive(Clone)]
pub struct RedisFeedCache {
    connection: MultiplexedConnection,
}

impl RedisFeedCache {
    pub fn new(connection: MultiplexedConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl FeedCache for RedisFeedCache {
    async fn get(&self, key: &str) -> DomainResult<Option<Vec<Post>>> {
        let mut conn = self.connection.clone();
        let payload: Option<String> = conn.get(key).await?;

        payload
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(Into::into)
    }

    async fn put(&self, key: &str, posts: &[Post], ttl: Duration) -> DomainResult<()> {
        let payload = serde_json::to_string(posts)?;
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);

        let mut conn = self.connection.clone();
        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(payload)
            .arg("PX")
            .arg(ttl_ms)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }
}
