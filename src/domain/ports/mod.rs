//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces the feed core depends on:
//! - PostRepository: durable post storage
//! - FeedCache: time-limited feed snapshot storage
//! - LikeStore: per-post like sets
//! - LikeLookupMetrics: latency observations for batched like lookups
//!
//! Adapters under `crate::adapters` implement them.

pub mod feed_cache;
pub mod like_metrics;
pub mod like_store;
pub mod post_repository;

pub use feed_cache::FeedCache;
pub use like_metrics::{LikeLookupMetrics, NoopLikeMetrics};
pub use like_store::LikeStore;
pub use post_repository::PostRepository;
