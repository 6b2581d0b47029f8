//! Device selection and accelerator discovery.
//!
//! Callers are expected to probe for an accelerator before asking for a timed
//! run on one: [`probe_gpu`] returns `Option` so the presence check is a
//! pattern match rather than a boolean buried in log output.

use pollster::FutureExt;
use std::fmt;

/// Identifies which compute unit an operation must run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceSelector {
    /// Host CPU.
    Cpu,
    /// The default high-performance GPU adapter reported by the platform.
    Gpu,
}

impl fmt::Display for DeviceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceSelector::Cpu => write!(f, "CPU"),
            DeviceSelector::Gpu => write!(f, "GPU"),
        }
    }
}

/// Identity of a detected GPU adapter.
#[derive(Debug, Clone)]
pub struct GpuAdapterInfo {
    /// Adapter name as reported by the driver.
    pub name: String,
    /// Graphics backend the adapter is reached through (Vulkan, Metal, ...).
    pub backend: String,
}

/// Ask the platform for a GPU adapter.
///
/// Returns `None` when no accelerator is present. This never panics; it is
/// the availability pre-check callers run before requesting a GPU-bound
/// measurement.
pub fn probe_gpu() -> Option<GpuAdapterInfo> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            ..Default::default()
        })
        .block_on()?;

    let info = adapter.get_info();
    Some(GpuAdapterInfo {
        name: info.name,
        backend: format!("{:?}", info.backend),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_selector_display_names() {
        assert_eq!(DeviceSelector::Cpu.to_string(), "CPU");
        assert_eq!(DeviceSelector::Gpu.to_string(), "GPU");
    }
}
