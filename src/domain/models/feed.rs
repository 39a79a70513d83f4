//! Feed-facing models: pagination, like summaries and the post view returned to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::post::{Post, PostId};

/// Default page size. Also the limit of the canonical feed query.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Pagination shape of a listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Page {
    /// Build a page, mapping a zero limit to [`DEFAULT_PAGE_LIMIT`].
    pub const fn new(limit: u32, offset: u32) -> Self {
        let limit = if limit == 0 { DEFAULT_PAGE_LIMIT } else { limit };
        Self { limit, offset }
    }

    /// The first page with the default size.
    pub const fn first() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT, 0)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}

/// Live like data for one post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeSummary {
    pub count: u64,
    pub liked_by_actor: bool,
}

impl LikeSummary {
    pub const fn new(count: u64, liked_by_actor: bool) -> Self {
        Self { count, liked_by_actor }
    }
}

/// External representation of a post: stored fields plus live like data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: PostId,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub body: String,
    pub like_count: u64,
    pub liked_by_actor: bool,
}

impl PostView {
    pub fn from_parts(post: Post, likes: LikeSummary) -> Self {
        Self {
            id: post.id,
            author_id: post.author_id,
            created_at: post.created_at,
            body: post.body,
            like_count: likes.count,
            liked_by_actor: likes.liked_by_actor,
        }
    }
}
