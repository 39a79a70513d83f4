use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::output::{emit, format_post_detail, format_post_table};
use crate::domain::models::{Page, PostId, RequestContext};
use crate::services::FeedService;

/// Handle post list command
pub async fn handle_list(service: &FeedService, ctx: &RequestContext, page: Page, json: bool) -> Result<()> {
    let posts = service.list_posts(ctx, page).await.context("Failed to list posts")?;
    emit(&posts, json, || format_post_table(&posts))
}

/// Handle post get command
pub async fn handle_get(service: &FeedService, ctx: &RequestContext, id: PostId, json: bool) -> Result<()> {
    let post = service.get_post(ctx, id).await.context("Failed to retrieve post")?;
    emit(&post, json, || format_post_detail(&post))
}

/// Handle post create command
pub async fn handle_create(service: &FeedService, ctx: &RequestContext, body: &str, json: bool) -> Result<()> {
    let post = service.create_post(ctx, body).await.context("Failed to create post")?;
    emit(&post, json, || format!("Created post {}", post.id))
}

/// Handle post edit command
pub async fn handle_edit(service: &FeedService, ctx: &RequestContext, id: PostId, body: &str, json: bool) -> Result<()> {
    let post = service.edit_post(ctx, id, body).await.context("Failed to edit post")?;
    emit(&post, json, || format_post_detail(&post))
}

/// Handle post delete command
pub async fn handle_delete(service: &FeedService, ctx: &RequestContext, id: PostId, json: bool) -> Result<()> {
    service.delete_post(ctx, id).await.context("Failed to delete post")?;
    emit(&json!({ "deleted": id }), json, || format!("Deleted post {id}"))
}

/// Handle post like command
pub async fn handle_like(service: &FeedService, ctx: &RequestContext, id: PostId, json: bool) -> Result<()> {
    if ctx.actor().is_none() {
        tracing::warn!("no actor given, like is ignored");
    }
    service.like_post(ctx, id).await.context("Failed to like post")?;
    emit(&json!({ "liked": id }), json, || format!("Liked post {id}"))
}

/// Handle post unlike command
pub async fn handle_unlike(service: &FeedService, ctx: &RequestContext, id: PostId, json: bool) -> Result<()> {
    if ctx.actor().is_none() {
        tracing::warn!("no actor given, unlike is ignored");
    }
    service.unlike_post(ctx, id).await.context("Failed to unlike post")?;
    emit(&json!({ "unliked": id }), json, || format!("Unliked post {id}"))
}
