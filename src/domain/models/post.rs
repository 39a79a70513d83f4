//! Post domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the durable store. Monotonically increasing.
pub type PostId = i64;

/// A post as persisted in the durable store.
///
/// Only `body` changes after creation. Serializable because feed snapshots
/// are stored in the cache tier as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a post. The store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    pub fn new(author_id: i64, body: impl Into<String>) -> Self {
        Self {
            author_id,
            body: body.into(),
            created_at: Utc::now(),
        }
    }

    /// Override the creation timestamp.
    pub fn at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}
