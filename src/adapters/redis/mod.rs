//! Redis adapters for the cache tier: feed snapshots and like sets.
//!
//! Both share one multiplexed connection.

pub mod connection;
pub mod feed_cache;
pub mod like_store;

pub use connection::{connect, RedisConnectionError};
pub use feed_cache::RedisFeedCache;
pub use like_store::{like_key, RedisLikeStore};
