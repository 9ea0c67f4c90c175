//! Test modules for the producer and consumer tasks

use crate::device::{DeviceError, OutputDevice};
use crate::queue::BlinkMessage;
use crate::tasks::Reporter;
use std::sync::{Arc, Mutex};

mod isolation;

/// Device that records every level it is driven to
pub(crate) struct RecordingDevice {
    line: u32,
    levels: Arc<Mutex<Vec<bool>>>,
}

impl RecordingDevice {
    pub(crate) fn new(line: u32) -> (Self, Arc<Mutex<Vec<bool>>>) {
        let levels = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                line,
                levels: Arc::clone(&levels),
            },
            levels,
        )
    }
}

impl OutputDevice for RecordingDevice {
    fn configure(&mut self) -> Result<(), DeviceError> {
        Ok(())
    }

    fn set_level(&mut self, high: bool) -> Result<(), DeviceError> {
        self.levels.lock().unwrap().push(high);
        Ok(())
    }

    fn line(&self) -> u32 {
        self.line
    }
}

/// Device that fails to configure, for failure-isolation tests
pub(crate) struct BrokenDevice {
    line: u32,
}

impl BrokenDevice {
    pub(crate) fn new(line: u32) -> Self {
        Self { line }
    }
}

impl OutputDevice for BrokenDevice {
    fn configure(&mut self) -> Result<(), DeviceError> {
        Err(DeviceError::ConfigureFailed {
            line: self.line,
            reason: "line held by another controller".to_string(),
        })
    }

    fn set_level(&mut self, _high: bool) -> Result<(), DeviceError> {
        Err(DeviceError::NotReady { line: self.line })
    }

    fn line(&self) -> u32 {
        self.line
    }
}

/// Device that starts failing `set_level` after a fixed number of calls
pub(crate) struct FlakyDevice {
    line: u32,
    successes_left: u32,
}

impl FlakyDevice {
    pub(crate) fn new(line: u32, successes: u32) -> Self {
        Self {
            line,
            successes_left: successes,
        }
    }
}

impl OutputDevice for FlakyDevice {
    fn configure(&mut self) -> Result<(), DeviceError> {
        Ok(())
    }

    fn set_level(&mut self, _high: bool) -> Result<(), DeviceError> {
        if self.successes_left == 0 {
            return Err(DeviceError::SetFailed {
                line: self.line,
                reason: "line dropped out".to_string(),
            });
        }
        self.successes_left -= 1;
        Ok(())
    }

    fn line(&self) -> u32 {
        self.line
    }
}

/// Reporter that collects every reported (source_id, sequence) pair
pub(crate) struct RecordingReporter {
    reported: Arc<Mutex<Vec<(u32, u32)>>>,
}

impl RecordingReporter {
    pub(crate) fn new() -> (Self, Arc<Mutex<Vec<(u32, u32)>>>) {
        let reported = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                reported: Arc::clone(&reported),
            },
            reported,
        )
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, msg: &BlinkMessage) {
        self.reported
            .lock()
            .unwrap()
            .push((msg.source_id, msg.sequence));
    }
}
