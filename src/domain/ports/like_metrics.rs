//! Observability port for batched like lookups.

use std::time::Duration;

/// Receives the duration of every batched like lookup.
pub trait LikeLookupMetrics: Send + Sync {
    /// Record one batch execution. `succeeded` is false when the batch failed.
    fn observe_batch(&self, batch_size: usize, duration: Duration, succeeded: bool);
}

/// Discards all observations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLikeMetrics;

impl LikeLookupMetrics for NoopLikeMetrics {
    fn observe_batch(&self, _batch_size: usize, _duration: Duration, _succeeded: bool) {}
}
