//! Benchmark suite for device comparison micro-benchmarks.
//!
//! This module wires the timed operation runner to the two reportable
//! procedures: a CPU vs GPU matrix multiplication comparison, and a showcase
//! of three element-wise add kernel variants.

pub mod benchmark_errors;
pub mod benchmark_runner;
pub mod benchmark_types;
pub mod performance_metrics;

pub use benchmark_errors::{BenchmarkError, BenchmarkResult};
pub use benchmark_runner::{BenchmarkRunner, ConfigLoader};
pub use benchmark_types::{AddKernelsConfig, KernelTiming, MatmulCompareConfig};
pub use performance_metrics::{
    format_device_time, format_speedup, outputs_match, print_kernel_comparison, NO_GPU_MESSAGE,
};
