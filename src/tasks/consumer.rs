//! Report consumer task
//!
//! The single consumer drains the queue in arrival order. Its only
//! suspension point is the blocking `pop`; throughput is entirely driven by
//! producer rate. Each message is dropped as soon as it has been reported,
//! which is the release step of the message lifecycle.

use crate::queue::{BlinkMessage, BlockingQueue};
use crate::tasks::reporter::Reporter;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Consumer bound to the queue and a reporting sink
pub struct ReportConsumer<R: Reporter> {
    queue: Arc<BlockingQueue<BlinkMessage>>,
    reporter: R,
}

impl<R: Reporter> ReportConsumer<R> {
    pub fn new(queue: Arc<BlockingQueue<BlinkMessage>>, reporter: R) -> Self {
        Self { queue, reporter }
    }

    /// Run forever: block on `pop`, report, release
    pub fn run(self) -> ! {
        log::debug!("Consumer started");
        loop {
            let msg = self.queue.pop();
            self.reporter.report(&msg);
            // msg dropped here: end of the message lifecycle
        }
    }

    /// Drain and report exactly one message, blocking if the queue is
    /// empty. Exposed for tests that need a bounded consumer run.
    #[cfg(test)]
    pub fn consume_one(&self) {
        let msg = self.queue.pop();
        self.reporter.report(&msg);
    }
}

/// Spawn the consumer on a named OS thread (`report`)
pub fn spawn_consumer<R: Reporter + 'static>(
    consumer: ReportConsumer<R>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("report".to_string())
        .spawn(move || consumer.run())
}
