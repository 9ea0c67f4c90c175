//! Blink producer task
//!
//! Each producer owns one output device and one queue handle. The loop
//! mirrors the pipeline contract: toggle the line, allocate a message,
//! push it, bump the counter, sleep for the configured period. A device
//! failure at any point is logged and ends this producer's loop without
//! touching the other tasks.

use crate::device::{DeviceResult, OutputDevice};
use crate::queue::{BlinkMessage, BlockingQueue};
use crate::tasks::config::ProducerConfig;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Periodic producer bound to one output device
///
/// The producer suspends only in its timed sleep between cycles; `push`
/// never blocks it. The `sequence` counter starts at 0 and wraps naturally
/// at `u32::MAX`.
pub struct BlinkProducer<D: OutputDevice> {
    config: ProducerConfig,
    device: D,
    queue: Arc<BlockingQueue<BlinkMessage>>,
    shutdown: Arc<AtomicBool>,
    sequence: u32,
}

impl<D: OutputDevice> BlinkProducer<D> {
    /// Create a producer bound to `device` and `queue`
    ///
    /// `shutdown` is checked between cycles; production wiring passes a
    /// flag that is never set, so the loop runs for the process lifetime.
    pub fn new(
        config: ProducerConfig,
        device: D,
        queue: Arc<BlockingQueue<BlinkMessage>>,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        Self {
            config,
            device,
            queue,
            shutdown,
            sequence: 0,
        }
    }

    pub fn config(&self) -> &ProducerConfig {
        &self.config
    }

    /// Run the producer loop until a device failure or shutdown request
    ///
    /// Configuration failure means the loop never starts: the error is
    /// logged and the task ends. The error is never propagated — producer
    /// failure is isolated by design to the failing task.
    pub fn run(mut self) {
        if let Err(err) = self.device.configure() {
            log::error!(
                "Producer {} stopping before first cycle: {}",
                self.config.source_id,
                err
            );
            return;
        }
        log::debug!(
            "Producer {} started on line {} with period {:?}",
            self.config.source_id,
            self.config.line,
            self.config.period
        );

        while !self.shutdown.load(Ordering::Acquire) {
            if let Err(err) = self.cycle() {
                log::error!("Producer {} stopping: {}", self.config.source_id, err);
                return;
            }
            thread::sleep(self.config.period);
        }
    }

    /// One emission cycle: toggle, allocate, enqueue, advance the counter
    fn cycle(&mut self) -> DeviceResult<()> {
        // Same parity as the counter: even cycles drive the line low.
        self.device.set_level(self.sequence % 2 == 1)?;

        self.queue
            .push(BlinkMessage::new(self.config.source_id, self.sequence));
        self.sequence = self.sequence.wrapping_add(1);
        Ok(())
    }
}

/// Spawn a producer on a named OS thread (`blink-<source_id>`)
pub fn spawn_producer<D: OutputDevice + 'static>(
    producer: BlinkProducer<D>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(format!("blink-{}", producer.config.source_id))
        .spawn(move || producer.run())
}
