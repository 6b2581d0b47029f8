//! Error types for benchmark operations.

use crate::errors::MeasureError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum BenchmarkError {
    ConfigParseError {
        path: String,
        source: serde_json::Error,
    },
    ConfigValidationError {
        field: String,
        message: String,
    },
    IoError {
        source: std::io::Error,
    },
    UnknownBenchmark {
        name: String,
    },
    ExecutionError {
        benchmark_name: String,
        message: String,
    },
    Measure {
        source: MeasureError,
    },
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchmarkError::ConfigParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse configuration file '{}': {}",
                    path, source
                )
            }
            BenchmarkError::ConfigValidationError { field, message } => {
                write!(
                    f,
                    "Configuration validation error for field '{}': {}",
                    field, message
                )
            }
            BenchmarkError::IoError { source } => {
                write!(f, "IO error: {}", source)
            }
            BenchmarkError::UnknownBenchmark { name } => {
                write!(
                    f,
                    "Unknown benchmark name: '{}'. Supported: matmul_compare, add_kernels",
                    name
                )
            }
            BenchmarkError::ExecutionError {
                benchmark_name,
                message,
            } => {
                write!(
                    f,
                    "Benchmark '{}' execution error: {}",
                    benchmark_name, message
                )
            }
            BenchmarkError::Measure { source } => {
                write!(f, "Measurement failed: {}", source)
            }
        }
    }
}

impl Error for BenchmarkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BenchmarkError::ConfigParseError { source, .. } => Some(source),
            BenchmarkError::IoError { source } => Some(source),
            BenchmarkError::Measure { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BenchmarkError {
    fn from(error: std::io::Error) -> Self {
        BenchmarkError::IoError { source: error }
    }
}

impl From<MeasureError> for BenchmarkError {
    fn from(error: MeasureError) -> Self {
        BenchmarkError::Measure { source: error }
    }
}

pub type BenchmarkResult<T> = Result<T, BenchmarkError>;
