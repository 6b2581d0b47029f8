//! Operations the timed runner can execute.
//!
//! An operation bundles the numeric routine with borrowed references to its
//! operand arrays. Operands stay owned by the caller and are read-only to the
//! runner: the CPU paths iterate over the borrowed slices directly, the GPU
//! paths upload them into device buffers.

pub mod elementwise_add;
pub mod matmul;

pub use elementwise_add::{AddKernel, ElementWiseAdd};
pub use matmul::MatrixMultiply;

use crate::errors::MeasureResult;
use crate::gpu::{GpuContext, GpuResult};
use rand::Rng;

/// A numeric operation executable on either device.
pub trait Operation {
    /// Stable operation name used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Check operand shapes; returns `MeasureError::ShapeMismatch` when the
    /// dimensions are incompatible with the operation.
    fn validate(&self) -> MeasureResult<()>;

    /// Number of elements the operation produces.
    fn output_len(&self) -> usize;

    /// Run on the host CPU and return the result.
    fn execute_cpu(&self) -> Vec<f32>;

    /// Run on the GPU bound to `ctx`, blocking until the result is
    /// host-readable.
    fn execute_gpu(&self, ctx: &GpuContext) -> GpuResult<Vec<f32>>;
}

/// A dense row-major matrix owned by the host.
#[derive(Debug, Clone)]
pub struct HostMatrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f32>,
}

impl HostMatrix {
    /// Matrix filled with uniform random values in `[0, 1)`.
    pub fn random(rows: usize, cols: usize) -> Self {
        let mut rng = rand::thread_rng();
        let data = (0..rows * cols)
            .map(|_| rng.gen_range(0.0f32..1.0))
            .collect();
        Self { rows, cols, data }
    }

    /// Matrix built from existing row-major data. The data length must equal
    /// `rows * cols`; shape checks against the other operand happen later in
    /// [`Operation::validate`].
    pub fn from_data(rows: usize, cols: usize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }
}

/// Vector of `len` uniform random values in `[0, 1)`.
pub fn random_vector(len: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(0.0f32..1.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_matrix_has_requested_shape() {
        let m = HostMatrix::random(3, 5);
        assert_eq!(m.rows, 3);
        assert_eq!(m.cols, 5);
        assert_eq!(m.data.len(), 15);
        assert!(m.data.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn random_vector_has_requested_length() {
        let v = random_vector(17);
        assert_eq!(v.len(), 17);
        assert!(v.iter().all(|x| (0.0..1.0).contains(x)));
    }
}
