//! GPU-specific error types for the device benchmark library.

use thiserror::Error;

/// Errors specific to GPU context setup and compute dispatch.
#[derive(Error, Debug)]
pub enum GpuError {
    #[error("GPU device not available: {message}")]
    DeviceNotAvailable { message: String },

    #[error("Failed to acquire GPU device: {message}")]
    RequestDeviceFailed { message: String },

    #[error("Failed to map result buffer for readback: {message}")]
    BufferMapFailed { message: String },
}

pub type GpuResult<T> = std::result::Result<T, GpuError>;
