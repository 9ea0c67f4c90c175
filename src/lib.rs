pub mod app;
pub mod core;
pub mod device;
pub mod queue;
pub mod tasks;
