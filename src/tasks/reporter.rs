//! Reporting sink for consumed messages

use crate::queue::BlinkMessage;

/// Fire-and-forget sink invoked once per dequeued message
///
/// Reporting always succeeds; there is no fallible path between the queue
/// and the sink.
pub trait Reporter: Send {
    fn report(&self, msg: &BlinkMessage);
}

/// Production reporter writing one info line per message via the `log`
/// facade
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, msg: &BlinkMessage) {
        log::info!("Toggled led{}; counter={}", msg.source_id, msg.sequence);
    }
}
