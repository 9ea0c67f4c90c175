//! Tests for failure isolation between tasks

use super::{BrokenDevice, RecordingDevice, RecordingReporter};
use crate::queue::BlockingQueue;
use crate::tasks::{
    spawn_consumer, spawn_producer, BlinkProducer, ProducerConfig, ReportConsumer,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_broken_producer_leaves_other_tasks_unaffected() {
    let queue = Arc::new(BlockingQueue::new());
    let shutdown = Arc::new(AtomicBool::new(false));

    // Producer 0's device refuses to configure; its task must end without
    // disturbing producer 1 or the consumer.
    let broken = BlinkProducer::new(
        ProducerConfig::new(0, 20, Duration::from_millis(1)),
        BrokenDevice::new(20),
        Arc::clone(&queue),
        Arc::clone(&shutdown),
    );
    let (device, _levels) = RecordingDevice::new(21);
    let healthy = BlinkProducer::new(
        ProducerConfig::new(1, 21, Duration::from_millis(1)),
        device,
        Arc::clone(&queue),
        Arc::clone(&shutdown),
    );

    let (reporter, reported) = RecordingReporter::new();
    let consumer = ReportConsumer::new(Arc::clone(&queue), reporter);

    let broken_handle = spawn_producer(broken).unwrap();
    let healthy_handle = spawn_producer(healthy).unwrap();
    let _consumer_handle = spawn_consumer(consumer).unwrap();

    broken_handle.join().unwrap();

    // Producer 1 keeps emitting on its own schedule after producer 0 died.
    let deadline = Instant::now() + Duration::from_secs(5);
    while reported.lock().unwrap().len() < 10 {
        assert!(
            Instant::now() < deadline,
            "healthy producer's messages were not consumed"
        );
        thread::sleep(Duration::from_millis(1));
    }

    shutdown.store(true, Ordering::Release);
    healthy_handle.join().unwrap();

    let reported = reported.lock().unwrap();
    assert!(reported.iter().all(|&(source_id, _)| source_id == 1));

    // Producer 1's sequences arrive gap-free and strictly increasing.
    for (position, &(_, sequence)) in reported.iter().enumerate() {
        assert_eq!(sequence, position as u32);
    }
}
