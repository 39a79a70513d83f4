//! Wiring of stores and services from configuration.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::adapters::memory::{InMemoryFeedCache, InMemoryLikeStore};
use crate::adapters::redis::{connect, RedisFeedCache, RedisLikeStore};
use crate::adapters::sqlite::{initialize_database, PoolConfig, SqlitePostRepository};
use crate::domain::models::{CacheBackend, Config};
use crate::domain::ports::{FeedCache, LikeStore};
use crate::infrastructure::metrics::MetricsFacadeLikeMetrics;
use crate::services::FeedService;

/// Open the durable store and cache tier named by `config` and assemble a
/// [`FeedService`] over them.
pub async fn build_feed_service(config: &Config) -> Result<FeedService> {
    let pool = initialize_database(
        &config.database.url,
        Some(PoolConfig::with_max_connections(config.database.max_connections)),
    )
    .await
    .with_context(|| format!("Failed to open database at {}", config.database.url))?;

    let (feed_cache, like_store) = cache_tier(config).await?;

    let service = FeedService::new(
        Arc::new(SqlitePostRepository::new(pool)),
        feed_cache,
        like_store,
        Arc::new(MetricsFacadeLikeMetrics::new()),
    )
    .configured(&config.cache, &config.likes);

    Ok(service)
}

async fn cache_tier(config: &Config) -> Result<(Arc<dyn FeedCache>, Arc<dyn LikeStore>)> {
    match config.cache.backend {
        CacheBackend::Redis => {
            let url = config.cache.redis.connection_url();
            let connection = connect(&url)
                .await
                .with_context(|| format!("Failed to connect to Redis at {}", config.cache.redis.addr))?;
            tracing::debug!(addr = %config.cache.redis.addr, db = config.cache.redis.db, "connected to redis");
            Ok((
                Arc::new(RedisFeedCache::new(connection.clone())),
                Arc::new(RedisLikeStore::new(connection)),
            ))
        }
        CacheBackend::Memory => {
            tracing::warn!("using process-local cache tier, likes are lost on exit");
            Ok((Arc::new(InMemoryFeedCache::new()), Arc::new(InMemoryLikeStore::new())))
        }
    }
}
