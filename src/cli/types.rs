//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::models::{PostId, DEFAULT_PAGE_LIMIT};

#[derive(Parser)]
#[command(name = "postfeed")]
#[command(about = "Postfeed - post feed with cached snapshots and like tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to postfeed.yaml and postfeed.local.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Acting user id; omitted means anonymous
    #[arg(short, long, global = true, env = "POSTFEED_ACTOR")]
    pub actor: Option<String>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List posts, newest first
    List {
        /// Maximum number of posts to display
        #[arg(short, long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,

        /// Number of posts to skip
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },

    /// Show a single post
    Get {
        /// Post ID
        id: PostId,
    },

    /// Create a new post
    Create {
        /// Post body
        body: String,
    },

    /// Replace the body of a post
    Edit {
        /// Post ID
        id: PostId,

        /// New post body
        body: String,
    },

    /// Delete a post and its likes
    Delete {
        /// Post ID
        id: PostId,
    },

    /// Like a post as the acting user
    Like {
        /// Post ID
        id: PostId,
    },

    /// Remove the acting user's like from a post
    Unlike {
        /// Post ID
        id: PostId,
    },
}
