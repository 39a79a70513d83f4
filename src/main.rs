//! Postfeed CLI entry point.

use anyhow::Context;
use clap::Parser;

use postfeed::cli::{commands, Cli};
use postfeed::domain::models::RequestContext;
use postfeed::infrastructure::build_feed_service;
use postfeed::infrastructure::config::ConfigLoader;
use postfeed::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        postfeed::cli::handle_error(err, json);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
    .context("Failed to load configuration")?;

    let log_config = LogConfig::from_settings(&config.logging)?;
    let _logger = LoggerImpl::init(&log_config)?;

    let service = build_feed_service(&config).await?;
    let ctx = RequestContext::from_header(cli.actor.as_deref());

    commands::execute(&service, &ctx, cli.command, cli.json).await
}
