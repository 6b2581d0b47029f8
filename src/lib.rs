//! Device-comparison micro-benchmarks for numeric kernels.
//!
//! This library times a single numeric operation on a chosen compute device
//! (host CPU or a GPU reached through `wgpu`) and reports elapsed wall-clock
//! seconds. The timed region always includes result materialization on the
//! host, so a measurement reflects actual completion rather than asynchronous
//! dispatch latency. It ships two operations: a dense matrix multiplication
//! used for CPU vs GPU comparison, and an element-wise addition with three
//! successive kernel variants (naive, workgroup-shared-memory staging, tuned
//! thread sizing) used to show incremental speedups.

pub mod benchmarks;
pub mod device;
pub mod errors;
pub mod gpu;
pub mod measure;
pub mod ops;

pub use device::{probe_gpu, DeviceSelector, GpuAdapterInfo};
pub use errors::{MeasureError, MeasureResult};
pub use measure::{measure, measure_on, ExecutionContext, Measurement};
pub use ops::{random_vector, AddKernel, ElementWiseAdd, HostMatrix, MatrixMultiply, Operation};
