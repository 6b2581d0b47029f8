//! The timed operation runner.
//!
//! A measurement is one synchronous, blocking call: bind an execution context
//! to the requested device (outside the timed region), start a monotonic
//! clock, run the operation, force the result to become host-readable, stop
//! the clock. The returned duration therefore covers execution plus
//! materialization and excludes input generation and device binding. There
//! are no retries, timeouts, or cancellation; a hang in the driver hangs the
//! caller.

use crate::device::DeviceSelector;
use crate::errors::{MeasureError, MeasureResult};
use crate::gpu::GpuContext;
use crate::ops::Operation;
use std::time::{Duration, Instant};

/// An execution context bound to one device.
///
/// Binding to the GPU acquires the adapter and device once; the context can
/// then serve any number of sequential measurements.
pub enum ExecutionContext {
    Cpu,
    Gpu(GpuContext),
}

impl ExecutionContext {
    /// Bind a context to the requested device.
    ///
    /// For [`DeviceSelector::Gpu`] this fails with
    /// [`MeasureError::DeviceUnavailable`] when no adapter is present or the
    /// device request is refused. Callers wanting to skip rather than fail
    /// should check [`crate::device::probe_gpu`] first.
    pub fn bind(device: DeviceSelector) -> MeasureResult<Self> {
        match device {
            DeviceSelector::Cpu => Ok(ExecutionContext::Cpu),
            DeviceSelector::Gpu => match GpuContext::new() {
                Ok(ctx) => Ok(ExecutionContext::Gpu(ctx)),
                Err(e) => Err(MeasureError::DeviceUnavailable {
                    device: device.to_string(),
                    message: e.to_string(),
                }),
            },
        }
    }

    /// The selector this context was bound with.
    pub fn device(&self) -> DeviceSelector {
        match self {
            ExecutionContext::Cpu => DeviceSelector::Cpu,
            ExecutionContext::Gpu(_) => DeviceSelector::Gpu,
        }
    }
}

/// Result of one timed run: the elapsed wall-clock time and the materialized
/// output. Nothing is persisted; both are dropped by the caller after use.
#[derive(Debug)]
pub struct Measurement {
    pub elapsed: Duration,
    pub output: Vec<f32>,
}

impl Measurement {
    /// Elapsed time as floating-point seconds.
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Execute `op` once on the bound device and return the elapsed time together
/// with the materialized output.
///
/// Shape validation happens before the clock starts, so a
/// [`MeasureError::ShapeMismatch`] never reflects partial execution.
pub fn measure(cx: &ExecutionContext, op: &dyn Operation) -> MeasureResult<Measurement> {
    op.validate()?;

    log::info!("Running {} on {}", op.name(), cx.device());
    let start = Instant::now();
    let output = match cx {
        ExecutionContext::Cpu => op.execute_cpu(),
        ExecutionContext::Gpu(ctx) => op.execute_gpu(ctx)?,
    };
    let elapsed = start.elapsed();

    Ok(Measurement { elapsed, output })
}

/// Bind a context to `device`, run `op` once, and return the measurement.
pub fn measure_on(device: DeviceSelector, op: &dyn Operation) -> MeasureResult<Measurement> {
    let cx = ExecutionContext::bind(device)?;
    measure(&cx, op)
}
