//! Error types for the device benchmark library.
//!
//! This module contains specific error types used throughout the library,
//! avoiding generic error wrappers like `anyhow` or `Box<dyn Error>` for better
//! error handling and debugging.

mod measure_error;

pub use measure_error::MeasureError;

/// Result type alias for timed-run operations.
pub type MeasureResult<T> = std::result::Result<T, MeasureError>;
