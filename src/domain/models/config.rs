use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::feed::DEFAULT_PAGE_LIMIT;

/// Main configuration structure for postfeed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Durable post store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Cache tier configuration (feed snapshot and like sets)
    #[serde(default)]
    pub cache: CacheConfig,

    /// Like tracking policies
    #[serde(default)]
    pub likes: LikesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// `SQLite` connection URL
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url() -> String {
    "sqlite:.postfeed/postfeed.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

/// Which cache tier implementation backs the feed snapshot and like sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheBackend {
    /// Shared Redis server
    #[default]
    Redis,
    /// Process-local cache, lost on exit
    Memory,
}

/// Cache tier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,

    #[serde(default)]
    pub redis: RedisConfig,

    /// Lifetime of the canonical feed snapshot
    #[serde(default = "default_feed_ttl_secs")]
    pub feed_ttl_secs: u64,

    /// Page size of the canonical (cacheable) feed query
    #[serde(default = "default_canonical_limit")]
    pub canonical_limit: u32,
}

const fn default_feed_ttl_secs() -> u64 {
    30
}

const fn default_canonical_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl CacheConfig {
    pub const fn feed_ttl(&self) -> Duration {
        Duration::from_secs(self.feed_ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            redis: RedisConfig::default(),
            feed_ttl_secs: default_feed_ttl_secs(),
            canonical_limit: default_canonical_limit(),
        }
    }
}

/// Redis connection settings
///
/// `url` wins when set; otherwise the URL is assembled from `addr`,
/// `password` and `db`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RedisConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_redis_addr")]
    pub addr: String,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub db: i64,
}

fn default_redis_addr() -> String {
    "localhost:6379".to_string()
}

impl RedisConfig {
    /// Connection URL in `redis://[:password@]host:port/db` form.
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }
        match self.password.as_deref().filter(|p| !p.is_empty()) {
            Some(password) => format!("redis://:{password}@{}/{}", self.addr, self.db),
            None => format!("redis://{}/{}", self.addr, self.db),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: None,
            addr: default_redis_addr(),
            password: None,
            db: 0,
        }
    }
}

/// How like/unlike writes report failures of the like store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Attempt the write, log failures, always report success
    #[default]
    BestEffort,
    /// Surface like store failures to the caller
    Confirmed,
}

/// What a listing does when the batched like lookup fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeReadPolicy {
    /// Return the page with zero counts and `liked_by_actor = false`
    #[default]
    Degrade,
    /// Fail the listing
    Fail,
}

/// Like tracking policies
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LikesConfig {
    #[serde(default)]
    pub write_mode: WriteMode,

    #[serde(default)]
    pub read_failure: LikeReadPolicy,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation: daily, hourly or never
    #[serde(default = "default_log_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_log_rotation(),
        }
    }
}
