//! GPU execution support built on `wgpu`.
//!
//! [`GpuContext`] owns a device/queue pair bound to the platform's default
//! high-performance adapter. [`GpuContext::run_compute`] executes one
//! [`ComputePass`] synchronously: it uploads the input slices as read-only
//! storage buffers, dispatches the compute shader, copies the output into a
//! staging buffer, and blocks until the mapped result is host-readable. That
//! final readback is the materialization step timed measurements rely on.

pub mod errors;
pub mod shaders;

pub use errors::{GpuError, GpuResult};

use pollster::FutureExt;
use std::sync::mpsc;
use wgpu::util::DeviceExt;

/// A device/queue pair bound to one GPU adapter.
pub struct GpuContext {
    device: wgpu::Device,
    queue: wgpu::Queue,
    adapter_info: wgpu::AdapterInfo,
}

/// Description of a single generic compute dispatch.
///
/// Inputs become read-only storage buffers at bindings `0..inputs.len()`;
/// the output is a read-write storage buffer at the next binding. The shader
/// source must declare matching bindings in group 0.
pub struct ComputePass<'a> {
    pub label: &'static str,
    pub shader_source: String,
    pub entry_point: &'static str,
    pub inputs: Vec<&'a [f32]>,
    pub output_len: usize,
    pub workgroups: (u32, u32, u32),
}

impl GpuContext {
    /// Bind a context to the default high-performance adapter, blocking until
    /// setup completes.
    pub fn new() -> GpuResult<Self> {
        Self::new_async().block_on()
    }

    async fn new_async() -> GpuResult<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                ..Default::default()
            })
            .await
            .ok_or_else(|| GpuError::DeviceNotAvailable {
                message: "no compatible adapter found".to_string(),
            })?;

        let adapter_info = adapter.get_info();
        log::info!(
            "Binding GPU context: {} ({:?})",
            adapter_info.name,
            adapter_info.backend
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default(), None)
            .await
            .map_err(|e| GpuError::RequestDeviceFailed {
                message: e.to_string(),
            })?;

        Ok(Self {
            device,
            queue,
            adapter_info,
        })
    }

    /// Name of the adapter this context is bound to.
    pub fn adapter_name(&self) -> &str {
        &self.adapter_info.name
    }

    /// Run one compute pass to completion and return the output buffer
    /// contents as host-readable data.
    pub fn run_compute(&self, pass: &ComputePass<'_>) -> GpuResult<Vec<f32>> {
        let shader = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(pass.label),
            source: wgpu::ShaderSource::Wgsl(pass.shader_source.as_str().into()),
        });

        // Bind group layout: read-only storage per input, then the output.
        let mut layout_entries = Vec::with_capacity(pass.inputs.len() + 1);
        for binding in 0..pass.inputs.len() as u32 {
            layout_entries.push(storage_layout_entry(binding, true));
        }
        layout_entries.push(storage_layout_entry(pass.inputs.len() as u32, false));

        let bind_group_layout =
            self.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Bind Group Layout"),
                    entries: &layout_entries,
                });

        let pipeline_layout = self
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let pipeline = self
            .device
            .create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
                label: Some(pass.label),
                layout: Some(&pipeline_layout),
                module: &shader,
                entry_point: Some(pass.entry_point),
                compilation_options: Default::default(),
                cache: None,
            });

        let input_buffers: Vec<wgpu::Buffer> = pass
            .inputs
            .iter()
            .map(|data| {
                self.device
                    .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("Input Buffer"),
                        contents: bytemuck::cast_slice(data),
                        usage: wgpu::BufferUsages::STORAGE,
                    })
            })
            .collect();

        let output_bytes = (pass.output_len * std::mem::size_of::<f32>()) as u64;
        let output_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Output Buffer"),
            size: output_bytes,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });

        let staging_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Staging Buffer"),
            size: output_bytes,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut bind_entries = Vec::with_capacity(input_buffers.len() + 1);
        for (binding, buffer) in input_buffers.iter().enumerate() {
            bind_entries.push(wgpu::BindGroupEntry {
                binding: binding as u32,
                resource: buffer.as_entire_binding(),
            });
        }
        bind_entries.push(wgpu::BindGroupEntry {
            binding: input_buffers.len() as u32,
            resource: output_buffer.as_entire_binding(),
        });

        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Bind Group"),
            layout: &bind_group_layout,
            entries: &bind_entries,
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor::default());
        {
            let mut cpass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor::default());
            cpass.set_pipeline(&pipeline);
            cpass.set_bind_group(0, &bind_group, &[]);
            let (x, y, z) = pass.workgroups;
            cpass.dispatch_workgroups(x, y, z);
        }
        encoder.copy_buffer_to_buffer(&output_buffer, 0, &staging_buffer, 0, output_bytes);
        self.queue.submit(Some(encoder.finish()));
        self.device.poll(wgpu::Maintain::Wait);

        // Blocking readback: maps the staging buffer and copies it back to the
        // host. Timing that includes this call covers real completion cost.
        let slice = staging_buffer.slice(..);
        let (tx, rx) = mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        self.device.poll(wgpu::Maintain::Wait);

        match rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                return Err(GpuError::BufferMapFailed {
                    message: e.to_string(),
                })
            }
            Err(_) => {
                return Err(GpuError::BufferMapFailed {
                    message: "map callback never completed".to_string(),
                })
            }
        }

        let data = slice.get_mapped_range();
        let result: Vec<f32> = bytemuck::cast_slice(&data).to_vec();
        drop(data);
        staging_buffer.unmap();

        Ok(result)
    }
}

fn storage_layout_entry(binding: u32, read_only: bool) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::COMPUTE,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Storage { read_only },
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}
