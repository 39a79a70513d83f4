//! Command-line interface over [`crate::services::FeedService`].

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use crate::domain::errors::DomainError;

/// Report a failed command on stderr (or stdout as JSON) and exit non-zero.
///
/// Missing posts exit with status 2, every other failure with 1.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    let not_found = matches!(err.downcast_ref::<DomainError>(), Some(DomainError::PostNotFound(_)));

    if json {
        let payload = serde_json::json!({
            "error": format!("{err:#}"),
            "not_found": not_found,
        });
        println!("{payload}");
    } else {
        eprintln!("Error: {err:#}");
    }

    std::process::exit(if not_found { 2 } else { 1 })
}
