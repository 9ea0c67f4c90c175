//! Output Device Error Types

#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Device for line {line} is not ready")]
    NotReady { line: u32 },

    #[error("Failed to configure line {line} as output: {reason}")]
    ConfigureFailed { line: u32, reason: String },

    #[error("Failed to set level on line {line}: {reason}")]
    SetFailed { line: u32, reason: String },
}

/// Result type for device operations
pub type DeviceResult<T> = Result<T, DeviceError>;
