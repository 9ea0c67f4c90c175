//! Test modules for the blocking queue
//!
//! Tests are organized by functional area: basic FIFO behavior, blocking
//! semantics, and concurrent stress.
