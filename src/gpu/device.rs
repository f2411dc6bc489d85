//! Device initialisation and capability detection.

use crate::gpu::error::GpuError;

/// Holds the wgpu device and queue.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

/// Result of a GPU initialisation attempt.
pub enum GpuAvailability {
    Available(GpuContext),
    Unavailable(String),
}

impl GpuContext {
    /// Attempts to initialise a device. Never fails; a missing or unusable
    /// adapter is reported as [`GpuAvailability::Unavailable`].
    pub async fn try_init() -> GpuAvailability {
        match Self::init_internal().await {
            Ok(ctx) => GpuAvailability::Available(ctx),
            Err(e) => {
                log::warn!("GPU initialisation failed: {e}");
                GpuAvailability::Unavailable(e.to_string())
            }
        }
    }

    async fn init_internal() -> Result<Self, GpuError> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;

        log::info!("GPU adapter: {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("fractal_pair"),
                    required_features: wgpu::Features::empty(),
                    // Storage buffers in compute shaders rule out the
                    // downlevel WebGL2 defaults.
                    required_limits: adapter.limits(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        Ok(Self { device, queue })
    }
}
