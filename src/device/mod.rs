//! Output Device Collaborator
//!
//! The pipeline's only hardware-facing surface. A producer receives an
//! opaque, pre-constructed [`OutputDevice`] value and drives it through a
//! two-call contract: `configure` once before its loop, `set_level` once per
//! cycle. Device discovery and addressing are outside this crate.

mod error;
mod virtual_led;

pub use error::{DeviceError, DeviceResult};
pub use virtual_led::VirtualLed;

/// Contract for a digital output line driven by a producer task
///
/// Implementations report failure through [`DeviceError`]; the producer
/// responds by logging and terminating its own loop without affecting any
/// other task.
pub trait OutputDevice: Send {
    /// Prepare the line for output. Called exactly once, before the first
    /// `set_level`.
    fn configure(&mut self) -> Result<(), DeviceError>;

    /// Drive the line high (`true`) or low (`false`).
    fn set_level(&mut self, high: bool) -> Result<(), DeviceError>;

    /// Opaque line identifier, used only for reporting.
    fn line(&self) -> u32;
}
