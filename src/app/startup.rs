//! Application startup wiring
//!
//! Constructs the single queue, binds the two producer configurations and
//! the consumer to it, and spawns the three tasks as named OS threads. No
//! task is ever stopped or joined; the process runs until externally
//! terminated.

use crate::app::cli::Args;
use crate::core::{logging, version};
use crate::device::VirtualLed;
use crate::queue::BlockingQueue;
use crate::tasks::{
    spawn_consumer, spawn_producer, BlinkProducer, LogReporter, ProducerConfig, ReportConsumer,
};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// Initialize application startup
pub fn startup() {
    let args = Args::parse();

    let use_color = (args.color || std::io::stdout().is_terminal()) && !args.no_color;
    let log_file = args.log_file.as_ref().map(|p| p.to_string_lossy().to_string());
    if let Err(err) = logging::init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Failed to initialise logging: {}", err);
        std::process::exit(1);
    }

    log::info!(
        "blinkpipe {} starting (built {}, git {})",
        env!("CARGO_PKG_VERSION"),
        version::build_time(),
        version::git_hash()
    );

    let queue = Arc::new(BlockingQueue::new());
    // Never set in production wiring: tasks run for the process lifetime.
    let shutdown = Arc::new(AtomicBool::new(false));

    let configs = [
        ProducerConfig::new(0, 0, Duration::from_millis(args.fast_period_ms)),
        ProducerConfig::new(1, 1, Duration::from_millis(args.slow_period_ms)),
    ];

    let mut producer_handles = Vec::new();
    for config in configs {
        let device = VirtualLed::new(config.line);
        let producer =
            BlinkProducer::new(config, device, Arc::clone(&queue), Arc::clone(&shutdown));
        match spawn_producer(producer) {
            Ok(handle) => producer_handles.push(handle),
            Err(err) => {
                log::error!("Failed to spawn producer thread: {}", err);
                std::process::exit(1);
            }
        }
    }

    let consumer = ReportConsumer::new(Arc::clone(&queue), LogReporter);
    let consumer_handle = match spawn_consumer(consumer) {
        Ok(handle) => handle,
        Err(err) => {
            log::error!("Failed to spawn consumer thread: {}", err);
            std::process::exit(1);
        }
    };

    // The consumer loop never returns, so this join blocks for the process
    // lifetime. An Err here means the consumer panicked.
    if consumer_handle.join().is_err() {
        log::error!("Consumer thread panicked");
        std::process::exit(1);
    }
}
