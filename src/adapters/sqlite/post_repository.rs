//! SQLite implementation of the PostRepository.

use async_trait::async_trait;
use chrono::SecondsFormat;
use sqlx::SqlitePool;

use super::parse_datetime;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{NewPost, Page, Post, PostId};
use crate::domain::ports::PostRepository;

pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list_recent(&self, page: Page) -> DomainResult<Vec<Post>> {
        let rows: Vec<PostRow> = sqlx::query_as(
            "SELECT id, author_id, body, created_at FROM posts ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?"
        )
        .bind(i64::from(page.limit))
        .bind(i64::from(page.offset))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn create(&self, post: NewPost) -> DomainResult<Post> {
        // Fixed-width timestamps keep lexical order equal to chronological order.
        let row: PostRow = sqlx::query_as(
            r#"INSERT INTO posts (author_id, body, created_at) VALUES (?, ?, ?)
               RETURNING id, author_id, body, created_at"#
        )
        .bind(post.author_id)
        .bind(&post.body)
        .bind(post.created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn get(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row: Option<PostRow> = sqlx::query_as(
            "SELECT id, author_id, body, created_at FROM posts WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn update_body(&self, id: PostId, body: &str) -> DomainResult<Post> {
        let row: Option<PostRow> = sqlx::query_as(
            r#"UPDATE posts SET body = ? WHERE id = ?
               RETURNING id, author_id, body, created_at"#
        )
        .bind(body)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(DomainError::PostNotFound(id))?.try_into()
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(id));
        }

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    author_id: i64,
    body: String,
    created_at: String,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: row.id,
            author_id: row.author_id,
            body: row.body,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}
