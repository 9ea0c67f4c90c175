//! Internal BlockingQueue implementation
//!
//! A mutex-protected `VecDeque` paired with a condition variable signalled
//! on "queue non-empty". `push` appends and wakes one waiter; `pop` removes
//! from the front, suspending while the queue is empty.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard};

/// Thread-safe, unbounded FIFO with blocking removal
///
/// The queue owns its elements outright: `push` takes ownership of the
/// value and `pop` transfers it to the caller, so no element is ever
/// observable by two tasks at once. Safe under arbitrary concurrent
/// pushers and poppers; each element is delivered to exactly one popper.
///
/// # Thread Safety
///
/// Share the queue across threads with `Arc<BlockingQueue<T>>`. All
/// interior state is protected by a single mutex; neither operation holds
/// the lock across a suspension other than the condition-variable wait
/// itself.
#[derive(Debug)]
pub struct BlockingQueue<T> {
    /// Element buffer in arrival order
    items: Mutex<VecDeque<T>>,
    /// Signalled by `push` whenever the buffer becomes observable non-empty
    not_empty: Condvar,
}

impl<T> BlockingQueue<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            not_empty: Condvar::new(),
        }
    }

    /// Append an item at the back of the queue
    ///
    /// Takes ownership of `item`, wakes one blocked `pop` caller if any,
    /// and returns immediately. Never fails and never blocks beyond the
    /// internal lock hand-off.
    pub fn push(&self, item: T) {
        let mut items = Self::lock(&self.items);
        items.push_back(item);
        // Notify under the lock: a waiter cannot re-enter the wait between
        // the append and the signal.
        self.not_empty.notify_one();
    }

    /// Remove and return the earliest-pushed item
    ///
    /// Blocks while the queue is empty. Emptiness is re-checked after every
    /// wakeup, so spurious wakeups and lost races against other poppers
    /// both fall back into the wait.
    pub fn pop(&self) -> T {
        let mut items = Self::lock(&self.items);
        loop {
            match items.pop_front() {
                Some(item) => return item,
                None => {
                    items = self
                        .not_empty
                        .wait(items)
                        .unwrap_or_else(|poisoned| poisoned.into_inner());
                }
            }
        }
    }

    /// Number of items currently queued
    pub fn len(&self) -> usize {
        Self::lock(&self.items).len()
    }

    pub fn is_empty(&self) -> bool {
        Self::lock(&self.items).is_empty()
    }

    /// Acquire the buffer lock, recovering from poisoning
    ///
    /// A poisoned lock only records that some holder panicked; the
    /// `VecDeque` itself is never left mid-mutation by the operations in
    /// this module, so the queue contents remain valid and the contract
    /// that `push`/`pop` are infallible is preserved.
    fn lock<'a>(items: &'a Mutex<VecDeque<T>>) -> MutexGuard<'a, VecDeque<T>> {
        items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
