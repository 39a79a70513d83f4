pub mod actor;
pub mod config;
pub mod feed;
pub mod post;

pub use actor::{ActorId, RequestContext};
pub use config::{
    CacheBackend, CacheConfig, Config, DatabaseConfig, LikeReadPolicy, LikesConfig, LoggingConfig,
    RedisConfig, WriteMode,
};
pub use feed::{LikeSummary, Page, PostView, DEFAULT_PAGE_LIMIT};
pub use post::{NewPost, Post, PostId};
