//! `metrics` facade implementation of the like lookup metrics port.
//!
//! Nothing is exported unless the binary installs a recorder; without one
//! every call is a no-op.

use metrics::{counter, histogram};
use std::time::Duration;

use crate::domain::ports::LikeLookupMetrics;

/// Histogram of batched like lookup durations, in seconds.
pub const LIKE_LOOKUP_DURATION: &str = "like_lookup_duration_seconds";
/// Histogram of posts per batched like lookup.
pub const LIKE_LOOKUP_BATCH_SIZE: &str = "like_lookup_batch_size";
/// Counter of failed batched like lookups.
pub const LIKE_LOOKUP_FAILURES: &str = "like_lookup_failures_total";

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsFacadeLikeMetrics;

impl MetricsFacadeLikeMetrics {
    pub const fn new() -> Self {
        Self
    }
}

impl LikeLookupMetrics for MetricsFacadeLikeMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn observe_batch(&self, batch_size: usize, duration: Duration, succeeded: bool) {
        let outcome = if succeeded { "ok" } else { "error" };
        histogram!(LIKE_LOOKUP_DURATION, "outcome" => outcome).record(duration.as_secs_f64());
        histogram!(LIKE_LOOKUP_BATCH_SIZE).record(batch_size as f64);
        if !succeeded {
            counter!(LIKE_LOOKUP_FAILURES).increment(1);
        }
    }
}
