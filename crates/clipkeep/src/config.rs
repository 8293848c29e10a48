//! Engine configuration.

use std::time::Duration;

/// Configuration for the history engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum entry count enforced against non-favorites. Favorites do
    /// not count toward eviction and may push the total above this bound.
    pub max_entries: usize,
    /// Cadence of the clipboard sampling loop.
    pub poll_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_entries: 100,
            poll_interval: Duration::from_millis(1000),
        }
    }
}

impl EngineConfig {
    /// Set the maximum entry count.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Set the sampling cadence.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}
