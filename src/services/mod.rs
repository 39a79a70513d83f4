//! Services coordinating the ports into feed operations.

pub mod feed_service;
pub mod feed_snapshot;
pub mod like_resolver;
pub mod like_tracker;

pub use feed_service::FeedService;
pub use feed_snapshot::{FeedSnapshotCache, DEFAULT_SNAPSHOT_TTL, FEED_SNAPSHOT_KEY};
pub use like_resolver::BatchLikeResolver;
pub use like_tracker::LikeTracker;
