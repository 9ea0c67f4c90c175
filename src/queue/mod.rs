//! Blocking FIFO Queue Component
//!
//! A thread-safe, unbounded, first-in-first-out queue that hands owned
//! messages from producer tasks to a consumer task.
//!
//! # Overview
//!
//! This module provides the single synchronisation primitive of the
//! pipeline. Key properties:
//!
//! - **Strict FIFO**: dequeue order is exactly enqueue order, across
//!   arbitrary producer interleavings
//! - **Ownership transfer**: `push` moves the value in, `pop` moves it out;
//!   no value is ever shared between tasks
//! - **Blocking removal**: `pop` suspends the calling thread while the
//!   queue is empty and resumes when a producer pushes
//! - **Unbounded capacity**: `push` never fails and never blocks
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │  Producer 0  │     │  Producer 1  │
//! └──────┬───────┘     └──────┬───────┘
//!        │ push               │ push
//!        ▼                    ▼
//! ┌─────────────────────────────────────┐
//! │        BlockingQueue (FIFO)         │
//! │   ┌───┬───┬───┬───┬───┬───┬───┐   │
//! │   │ 1 │ 2 │ 3 │ 4 │ 5 │ 6 │...│   │
//! │   └───┴───┴───┴───┴───┴───┴───┘   │
//! └──────────────────┬──────────────────┘
//!                    │ pop (blocks while empty)
//!             ┌──────┴──────┐
//!             │  Consumer   │
//!             └─────────────┘
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use blinkpipe::queue::{BlinkMessage, BlockingQueue};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let queue = Arc::new(BlockingQueue::new());
//!
//! let producer_queue = Arc::clone(&queue);
//! thread::spawn(move || {
//!     producer_queue.push(BlinkMessage::new(0, 0));
//! });
//!
//! // Blocks until the producer's push lands
//! let msg = queue.pop();
//! assert_eq!(msg.source_id, 0);
//! ```

mod fifo;
mod message;

pub use fifo::BlockingQueue;
pub use message::BlinkMessage;

#[cfg(test)]
mod tests;
