//! Redis connection management.

use redis::aio::MultiplexedConnection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RedisConnectionError {
    #[error("Invalid Redis URL: {0}")]
    InvalidUrl(#[source] redis::RedisError),
    #[error("Connection failed: {0}")]
    ConnectionFailed(#[source] redis::RedisError),
    #[error("Ping failed: {0}")]
    PingFailed(#[source] redis::RedisError),
}

/// Open a multiplexed connection and verify it with `PING`.
///
/// The returned handle is cheap to clone and shared by every request.
pub async fn connect(url: &str) -> Result<MultiplexedConnection, RedisConnectionError> {
    let client = redis::Client::open(url).map_err(RedisConnectionError::InvalidUrl)?;

    let mut connection = client
        .get_multiplexed_async_connection()
        .await
        .map_err(RedisConnectionError::ConnectionFailed)?;

    let _: String = redis::cmd("PING")
        .query_async(&mut connection)
        .await
        .map_err(RedisConnectionError::PingFailed)?;

    Ok(connection)
}
