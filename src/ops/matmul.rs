//! Dense matrix multiplication operation.

use crate::errors::{MeasureError, MeasureResult};
use crate::gpu::shaders::{self, MATMUL_WORKGROUP_DIM};
use crate::gpu::{ComputePass, GpuContext, GpuResult};
use crate::ops::{HostMatrix, Operation};

/// Multiplies two borrowed row-major matrices.
///
/// The CPU path is the naive triple loop; the GPU path computes one output
/// element per shader invocation over a 2D dispatch grid.
pub struct MatrixMultiply<'a> {
    a: &'a HostMatrix,
    b: &'a HostMatrix,
}

impl<'a> MatrixMultiply<'a> {
    pub fn new(a: &'a HostMatrix, b: &'a HostMatrix) -> Self {
        Self { a, b }
    }
}

impl Operation for MatrixMultiply<'_> {
    fn name(&self) -> &'static str {
        "matrix_multiply"
    }

    fn validate(&self) -> MeasureResult<()> {
        if self.a.cols != self.b.rows {
            return Err(MeasureError::ShapeMismatch {
                operation: self.name().to_string(),
                detail: format!(
                    "left operand is {}x{} but right operand is {}x{}; inner dimensions must match",
                    self.a.rows, self.a.cols, self.b.rows, self.b.cols
                ),
            });
        }
        Ok(())
    }

    fn output_len(&self) -> usize {
        self.a.rows * self.b.cols
    }

    fn execute_cpu(&self) -> Vec<f32> {
        let (m, k, n) = (self.a.rows, self.a.cols, self.b.cols);
        let mut out = vec![0.0f32; m * n];
        for row in 0..m {
            for col in 0..n {
                let mut sum = 0.0f32;
                for i in 0..k {
                    sum += self.a.data[row * k + i] * self.b.data[i * n + col];
                }
                out[row * n + col] = sum;
            }
        }
        out
    }

    fn execute_gpu(&self, ctx: &GpuContext) -> GpuResult<Vec<f32>> {
        let (m, k, n) = (
            self.a.rows as u32,
            self.a.cols as u32,
            self.b.cols as u32,
        );
        let pass = ComputePass {
            label: "matmul",
            shader_source: shaders::matmul_shader(m, k, n),
            entry_point: "main",
            inputs: vec![&self.a.data, &self.b.data],
            output_len: self.output_len(),
            workgroups: (
                n.div_ceil(MATMUL_WORKGROUP_DIM),
                m.div_ceil(MATMUL_WORKGROUP_DIM),
                1,
            ),
        };
        ctx.run_compute(&pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_matmul_matches_hand_computed_result() {
        let a = HostMatrix::from_data(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = HostMatrix::from_data(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let op = MatrixMultiply::new(&a, &b);

        op.validate().unwrap();
        assert_eq!(op.output_len(), 4);
        assert_eq!(op.execute_cpu(), vec![58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn inner_dimension_mismatch_is_rejected() {
        let a = HostMatrix::random(2, 3);
        let b = HostMatrix::random(4, 2);
        let op = MatrixMultiply::new(&a, &b);

        assert!(matches!(
            op.validate(),
            Err(MeasureError::ShapeMismatch { .. })
        ));
    }
}
