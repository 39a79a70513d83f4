//! In-process adapters for the cache tier.
//!
//! Used when no Redis server is configured and as test doubles. The feed
//! cache follows the moka TTL decorator approach; the like store keeps sets
//! in a `RwLock`ed map.

pub mod feed_cache;
pub mod like_store;
pub mod metrics;

pub use feed_cache::InMemoryFeedCache;
pub use like_store::InMemoryLikeStore;
pub use metrics::{BatchObservation, RecordingLikeMetrics};
