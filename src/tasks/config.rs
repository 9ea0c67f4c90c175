//! Producer task configuration
//!
//! Binding of task identity to device line and emission period happens at
//! process start: startup builds one `ProducerConfig` per producer and
//! spawns a task for each.

use std::time::Duration;

/// Configuration for one producer task, fixed at creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerConfig {
    /// Identity stamped into every message this producer emits
    pub source_id: u32,
    /// Output line the producer drives
    pub line: u32,
    /// Fixed interval between emissions
    pub period: Duration,
}

impl ProducerConfig {
    pub fn new(source_id: u32, line: u32, period: Duration) -> Self {
        Self {
            source_id,
            line,
            period,
        }
    }
}
