//! Message type carried through the blocking queue
//!
//! Messages are immutable value objects: constructed by a producer, moved
//! through the queue, and dropped by the consumer after reporting. No field
//! changes after construction and no instance is ever shared between tasks.

use std::time::SystemTime;

/// One blink event emitted by a producer task
///
/// Carries the identity of the emitting producer and that producer's
/// monotonically increasing emission counter. The counter starts at 0 and
/// wraps naturally at `u32::MAX`.
///
/// # Example
///
/// ```rust
/// use blinkpipe::queue::BlinkMessage;
///
/// let msg = BlinkMessage::new(0, 42);
/// assert_eq!(msg.source_id, 0);
/// assert_eq!(msg.sequence, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlinkMessage {
    /// Identifier of the producer that emitted this message
    pub source_id: u32,
    /// Per-producer emission counter, starting at 0
    pub sequence: u32,
    /// Timestamp when the message was created
    pub timestamp: SystemTime,
}

impl BlinkMessage {
    pub fn new(source_id: u32, sequence: u32) -> Self {
        Self {
            source_id,
            sequence,
            timestamp: SystemTime::now(),
        }
    }
}
