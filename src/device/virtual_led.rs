//! Process-local LED stand-in
//!
//! Tracks the level of one output line in memory and logs transitions at
//! debug level. This is the production device for host-side runs; an
//! embedder with real GPIO supplies its own [`OutputDevice`] implementation.

use crate::device::{DeviceError, OutputDevice};

/// In-process digital output line
///
/// Mirrors the shape of a real GPIO line: it must be configured before use
/// and rejects `set_level` calls on an unconfigured line.
#[derive(Debug)]
pub struct VirtualLed {
    line: u32,
    level: bool,
    configured: bool,
}

impl VirtualLed {
    pub fn new(line: u32) -> Self {
        Self {
            line,
            level: false,
            configured: false,
        }
    }

    /// Current line level
    pub fn level(&self) -> bool {
        self.level
    }
}

impl OutputDevice for VirtualLed {
    fn configure(&mut self) -> Result<(), DeviceError> {
        self.configured = true;
        self.level = false;
        log::debug!("Configured line {} as output", self.line);
        Ok(())
    }

    fn set_level(&mut self, high: bool) -> Result<(), DeviceError> {
        if !self.configured {
            return Err(DeviceError::NotReady { line: self.line });
        }
        self.level = high;
        log::debug!(
            "Line {} set {}",
            self.line,
            if high { "high" } else { "low" }
        );
        Ok(())
    }

    fn line(&self) -> u32 {
        self.line
    }
}
