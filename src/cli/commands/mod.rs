//! Command handlers, one per subcommand.

pub mod post;

use anyhow::Result;

use crate::cli::types::Commands;
use crate::domain::models::{Page, RequestContext};
use crate::services::FeedService;

/// Run `command` against `service` on behalf of `ctx`.
pub async fn execute(service: &FeedService, ctx: &RequestContext, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::List { limit, offset } => post::handle_list(service, ctx, Page::new(limit, offset), json).await,
        Commands::Get { id } => post::handle_get(service, ctx, id, json).await,
        Commands::Create { body } => post::handle_create(service, ctx, &body, json).await,
        Commands::Edit { id, body } => post::handle_edit(service, ctx, id, &body, json).await,
        Commands::Delete { id } => post::handle_delete(service, ctx, id, json).await,
        Commands::Like { id } => post::handle_like(service, ctx, id, json).await,
        Commands::Unlike { id } => post::handle_unlike(service, ctx, id, json).await,
    }
}
