//! Error types for timed operation runs.

use crate::gpu::errors::GpuError;
use thiserror::Error;

/// Errors that can occur while binding a device or executing a timed operation.
///
/// None of these are retried anywhere: device absence is expected to be ruled
/// out by the caller with [`crate::device::probe_gpu`] before timing, and the
/// remaining variants are fatal.
#[derive(Error, Debug)]
pub enum MeasureError {
    #[error("Requested device unavailable ({device}): {message}")]
    DeviceUnavailable { device: String, message: String },

    #[error("Shape mismatch for {operation}: {detail}")]
    ShapeMismatch { operation: String, detail: String },

    #[error("GPU execution failed: {0}")]
    Gpu(#[from] GpuError),
}
