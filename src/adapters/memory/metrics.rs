//! Recording implementation of the like lookup metrics port.

use std::sync::Mutex;
use std::time::Duration;

use crate::domain::ports::LikeLookupMetrics;

/// One recorded batch observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchObservation {
    pub batch_size: usize,
    pub duration: Duration,
    pub succeeded: bool,
}

/// Keeps every observation in memory for inspection.
#[derive(Debug, Default)]
pub struct RecordingLikeMetrics {
    observations: Mutex<Vec<BatchObservation>>,
}

impl RecordingLikeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observations(&self) -> Vec<BatchObservation> {
        self.observations
            .lock()
            .map(|observations| observations.clone())
            .unwrap_or_default()
    }
}

impl LikeLookupMetrics for RecordingLikeMetrics {
    fn observe_batch(&self, batch_size: usize, duration: Duration, succeeded: bool) {
        if let Ok(mut observations) = self.observations.lock() {
            observations.push(BatchObservation {
                batch_size,
                duration,
                succeeded,
            });
        }
    }
}
