//! Producer and Consumer Tasks
//!
//! The three long-lived tasks of the pipeline: two [`BlinkProducer`]s that
//! toggle an output line and enqueue a [`crate::queue::BlinkMessage`] at a
//! fixed period, and one [`ReportConsumer`] that blocks on the queue and
//! reports every message it receives.
//!
//! Tasks run as named OS threads spawned by the helpers in this module.
//! Nothing ever joins or stops them in production wiring; producers carry a
//! shutdown flag checked between cycles so tests can bound a run.

mod config;
mod consumer;
mod producer;
mod reporter;

pub use config::ProducerConfig;
pub use consumer::{spawn_consumer, ReportConsumer};
pub use producer::{spawn_producer, BlinkProducer};
pub use reporter::{LogReporter, Reporter};

#[cfg(test)]
mod tests;
