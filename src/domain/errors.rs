//! Domain errors for the post feed.

use thiserror::Error;

use super::models::PostId;

/// Domain-level errors that can occur while serving the feed.
///
/// Only `PostNotFound` and `DatabaseError` are allowed to fail a request
/// outright. `CacheError` and `SerializationError` come from the cache tier
/// and are absorbed by the services unless a stricter policy is configured.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Whether this error originates in the cache tier rather than the durable store.
    pub const fn is_cache_error(&self) -> bool {
        matches!(self, Self::CacheError(_) | Self::SerializationError(_))
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl From<redis::RedisError> for DomainError {
    fn from(err: redis::RedisError) -> Self {
        DomainError::CacheError(err.to_string())
    }
}
