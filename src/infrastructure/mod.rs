//! Infrastructure layer module
//!
//! Ambient concerns around the feed core:
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)
//! - Metrics facade for like lookups
//! - Service wiring from configuration

pub mod config;
pub mod logging;
pub mod metrics;
pub mod setup;

pub use setup::build_feed_service;
