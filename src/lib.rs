//! Postfeed - post feed core with a read-through snapshot cache and batched like tracking
//!
//! Posts live in a durable SQLite store. A volatile cache tier (Redis, or a
//! process-local stand-in) holds a short-lived snapshot of the first feed
//! page and one like set per post. Like counts are always read live, in a
//! single round trip per page.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors and port traits
//! - **Adapters** (`adapters`): SQLite, Redis and in-memory port implementations
//! - **Service Layer** (`services`): Snapshot policy, like resolution and feed assembly
//! - **Infrastructure Layer** (`infrastructure`): Configuration, logging, metrics and wiring
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use postfeed::{build_feed_service, ConfigLoader, Page, RequestContext};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let service = build_feed_service(&config).await?;
//!     let posts = service.list_posts(&RequestContext::for_actor("42"), Page::first()).await?;
//!     println!("{} posts", posts.len());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    ActorId, CacheBackend, Config, LikeReadPolicy, LikeSummary, NewPost, Page, Post, PostId, PostView,
    RequestContext, WriteMode,
};
pub use domain::ports::{FeedCache, LikeLookupMetrics, LikeStore, PostRepository};
pub use infrastructure::build_feed_service;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{BatchLikeResolver, FeedService, FeedSnapshotCache, LikeTracker};
