//! Benchmark type definitions and configuration structures.

use super::benchmark_errors::{BenchmarkError, BenchmarkResult};
use serde::{Deserialize, Serialize};

/// Configuration for the CPU vs GPU matrix multiplication comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatmulCompareConfig {
    pub name: String,
    pub description: String,
    /// Side length of the two square operand matrices.
    pub matrix_size: usize,
}

impl Default for MatmulCompareConfig {
    fn default() -> Self {
        Self {
            name: "matmul_compare".to_string(),
            description: "Single dense matrix multiplication timed on CPU and GPU".to_string(),
            matrix_size: 5000,
        }
    }
}

impl MatmulCompareConfig {
    /// Validates the configuration
    pub fn validate(&self) -> BenchmarkResult<()> {
        if self.matrix_size == 0 {
            return Err(BenchmarkError::ConfigValidationError {
                field: "matrix_size".to_string(),
                message: "Matrix size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Configuration for the element-wise add kernel showcase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddKernelsConfig {
    pub name: String,
    pub description: String,
    /// Length of the two operand vectors.
    pub element_count: usize,
}

impl Default for AddKernelsConfig {
    fn default() -> Self {
        Self {
            name: "add_kernels".to_string(),
            description: "Three element-wise add kernel variants timed on the GPU".to_string(),
            element_count: 1_048_576,
        }
    }
}

impl AddKernelsConfig {
    /// Validates the configuration
    pub fn validate(&self) -> BenchmarkResult<()> {
        if self.element_count == 0 {
            return Err(BenchmarkError::ConfigValidationError {
                field: "element_count".to_string(),
                message: "Element count must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// One single-shot timing, labelled for the printed comparison.
#[derive(Debug, Clone)]
pub struct KernelTiming {
    pub label: String,
    pub seconds: f64,
}

impl KernelTiming {
    pub fn new(label: String, seconds: f64) -> Self {
        Self { label, seconds }
    }

    /// How many times faster this timing is than `baseline`.
    pub fn speedup_vs(&self, baseline: &KernelTiming) -> f64 {
        baseline.seconds / self.seconds
    }
}
