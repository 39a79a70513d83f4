//! Output formatting utilities for the CLI.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::domain::models::PostView;

const BODY_PREVIEW_LEN: usize = 60;

/// Print `value` as pretty JSON, or `human` otherwise.
pub fn emit<T: Serialize>(value: &T, json_mode: bool, human: impl FnOnce() -> String) -> anyhow::Result<()> {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", human());
    }
    Ok(())
}

/// Create a standard list table with the given headers.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)));
    table
}

pub fn format_post_table(posts: &[PostView]) -> String {
    if posts.is_empty() {
        return "No posts found.".to_string();
    }

    let mut table = list_table(&["id", "author", "created", "likes", "liked", "body"]);
    for post in posts {
        table.add_row(vec![
            Cell::new(post.id).set_alignment(CellAlignment::Right),
            Cell::new(post.author_id).set_alignment(CellAlignment::Right),
            Cell::new(post.created_at.format("%Y-%m-%d %H:%M:%S")),
            Cell::new(post.like_count).set_alignment(CellAlignment::Right),
            Cell::new(if post.liked_by_actor { "yes" } else { "" }),
            Cell::new(truncate(&post.body, BODY_PREVIEW_LEN)),
        ]);
    }

    format!(
        "{table}\n\nShowing {} post{}",
        posts.len(),
        if posts.len() == 1 { "" } else { "s" }
    )
}

pub fn format_post_detail(post: &PostView) -> String {
    format!(
        "Post {}\n  Author:  {}\n  Created: {}\n  Likes:   {}{}\n\n{}",
        post.id,
        post.author_id,
        post.created_at.to_rfc3339(),
        post.like_count,
        if post.liked_by_actor { " (including you)" } else { "" },
        post.body
    )
}

/// Truncate a string to at most `max_len` characters, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
