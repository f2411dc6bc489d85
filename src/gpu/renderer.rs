//! Grid renderer backed by the escape-time compute program.

use crate::core::actions::render_grid::errors::RenderError;
use crate::core::actions::render_grid::ports::grid_renderer::GridRenderer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::resolution::Resolution;
use crate::gpu::colour_texture::ColourTexture;
use crate::gpu::device::{GpuAvailability, GpuContext};
use crate::gpu::error::GpuError;
use crate::gpu::pipeline::GpuPipeline;
use crate::gpu::uniforms::Uniforms;
use std::time::Instant;

const WORKGROUP_SIZE: u32 = 8;

struct GridBuffers {
    resolution: Resolution,
    uniforms: wgpu::Buffer,
    pixels: wgpu::Buffer,
    staging: wgpu::Buffer,
}

impl GridBuffers {
    fn new(device: &wgpu::Device, resolution: Resolution) -> Result<Self, GpuError> {
        let bytes = resolution.pixel_count() as u64 * std::mem::size_of::<u32>() as u64;
        let max = device.limits().max_storage_buffer_binding_size;

        if bytes > u64::from(max) {
            return Err(GpuError::GridTooLarge { bytes, max });
        }

        let uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("escape_time_params"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let pixels = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("escape_time_pixels"),
            size: bytes,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });

        let staging = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("escape_time_staging"),
            size: bytes,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            resolution,
            uniforms,
            pixels,
            staging,
        })
    }
}

/// Renders on the device, one compute invocation per pixel.
///
/// Grid buffers are reused while the resolution stays the same. The colour
/// texture is re-uploaded only when a request carries a different table.
pub struct GpuGridRenderer {
    context: GpuContext,
    pipeline: GpuPipeline,
    colour_texture: Option<ColourTexture>,
    buffers: Option<GridBuffers>,
}

impl GpuGridRenderer {
    pub async fn new(context: GpuContext) -> Result<Self, GpuError> {
        let pipeline = GpuPipeline::new(&context.device).await?;

        Ok(Self {
            context,
            pipeline,
            colour_texture: None,
            buffers: None,
        })
    }

    /// Initialises a device and compiles the program, blocking the caller.
    pub fn try_new_blocking() -> Result<Self, GpuError> {
        pollster::block_on(async {
            match GpuContext::try_init().await {
                GpuAvailability::Available(context) => Self::new(context).await,
                GpuAvailability::Unavailable(reason) => Err(GpuError::Unavailable(reason)),
            }
        })
    }

    /// Renders one view and returns its RGBA bytes, row-major.
    pub async fn render_rgba(&mut self, request: &RenderRequest) -> Result<Vec<u8>, GpuError> {
        let device = &self.context.device;
        let queue = &self.context.queue;

        if !self
            .colour_texture
            .as_ref()
            .is_some_and(|texture| texture.is_for(&request.colour_table))
        {
            self.colour_texture = Some(ColourTexture::upload(
                device,
                queue,
                &request.colour_table,
            )?);
        }

        if self
            .buffers
            .as_ref()
            .is_none_or(|buffers| buffers.resolution != request.resolution)
        {
            log::debug!("allocating GPU buffers for {} grid", request.resolution);
            self.buffers = Some(GridBuffers::new(device, request.resolution)?);
        }

        let (Some(colour_texture), Some(buffers)) = (&self.colour_texture, &self.buffers) else {
            return Err(GpuError::Unavailable("render resources missing".into()));
        };

        let uniforms = Uniforms::from_request(request);
        queue.write_buffer(&buffers.uniforms, 0, bytemuck::bytes_of(&uniforms));

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("escape_time_bind_group"),
            layout: &self.pipeline.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffers.uniforms.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&colour_texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.pipeline.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: buffers.pixels.as_entire_binding(),
                },
            ],
        });

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("escape_time_encoder"),
        });

        {
            let mut compute_pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("escape_time_pass"),
                timestamp_writes: None,
            });
            let groups = request.resolution.get().div_ceil(WORKGROUP_SIZE);

            compute_pass.set_pipeline(&self.pipeline.compute_pipeline);
            compute_pass.set_bind_group(0, &bind_group, &[]);
            compute_pass.dispatch_workgroups(groups, groups, 1);
        }

        encoder.copy_buffer_to_buffer(
            &buffers.pixels,
            0,
            &buffers.staging,
            0,
            buffers.staging.size(),
        );

        queue.submit(std::iter::once(encoder.finish()));

        self.read_pixels(&buffers.staging).await
    }

    async fn read_pixels(&self, buffer: &wgpu::Buffer) -> Result<Vec<u8>, GpuError> {
        let slice = buffer.slice(..);

        let (tx, rx) = futures_channel::oneshot::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });

        self.context.device.poll(wgpu::Maintain::Wait);

        rx.await
            .map_err(|_| GpuError::Unavailable("channel closed".into()))?
            .map_err(GpuError::BufferMap)?;

        // Each word is pack4x8unorm output: red in the low byte.
        let data = {
            let view = slice.get_mapped_range();
            let words: &[u32] = bytemuck::cast_slice(&view);
            words.iter().flat_map(|word| word.to_le_bytes()).collect()
        };
        buffer.unmap();

        Ok(data)
    }
}

impl GridRenderer for GpuGridRenderer {
    fn backend_name(&self) -> &'static str {
        "gpu"
    }

    fn render(&mut self, request: &RenderRequest) -> Result<PixelBuffer, RenderError> {
        let start = Instant::now();
        let data = pollster::block_on(self.render_rgba(request))
            .map_err(|err| RenderError::Accelerated(Box::new(err)))?;
        let pixel_buffer = PixelBuffer::from_data(request.resolution, data)?;

        log::debug!(
            "{} view rendered on gpu in {:?}",
            request.view,
            start.elapsed()
        );

        Ok(pixel_buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_grid::cpu_grid_renderer::CpuGridRenderer;
    use crate::core::colour_mapping::kinds::ColourMapKind;
    use crate::core::colour_mapping::lookup_table::ColourLookupTable;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::point::GridPoint;
    use crate::core::fractals::formula::FormulaId;
    use crate::core::fractals::view_kind::ViewKind;
    use std::sync::Arc;

    fn request(formula: FormulaId, view: ViewKind) -> RenderRequest {
        RenderRequest {
            resolution: Resolution::new(64).unwrap(),
            domain: ComplexRect::default(),
            formula,
            view,
            fixed: Complex::new(-0.4, 0.6),
            max_iterations: 100,
            colour_table: Arc::new(ColourLookupTable::build(ColourMapKind::Viridis, 1000).unwrap()),
        }
    }

    fn renderer() -> Option<GpuGridRenderer> {
        match GpuGridRenderer::try_new_blocking() {
            Ok(renderer) => Some(renderer),
            Err(err) => {
                println!("Skipping test: {err}");
                None
            }
        }
    }

    fn is_black(pixel_buffer: &PixelBuffer, pixel: GridPoint) -> bool {
        pixel_buffer.pixel(pixel) == Ok(Colour::BLACK)
    }

    #[test]
    fn gpu_init_does_not_panic() {
        pollster::block_on(async {
            match GpuContext::try_init().await {
                GpuAvailability::Available(_) => println!("GPU available"),
                GpuAvailability::Unavailable(reason) => println!("GPU unavailable: {reason}"),
            }
        });
    }

    #[test]
    fn gpu_output_is_opaque_and_centre_is_black() {
        let Some(mut renderer) = renderer() else {
            return;
        };
        let mut request = request(FormulaId::Standard, ViewKind::Mandelbrot);
        request.fixed = Complex::ORIGIN;

        let pixel_buffer = renderer.render(&request).unwrap();

        assert!(pixel_buffer.buffer().chunks_exact(4).all(|px| px[3] == 255));
        assert!(is_black(&pixel_buffer, GridPoint { x: 32, y: 32 }));
        assert!(!is_black(&pixel_buffer, GridPoint { x: 0, y: 0 }));
    }

    #[test]
    fn gpu_bounded_set_matches_cpu() {
        let Some(mut renderer) = renderer() else {
            return;
        };

        for &formula in FormulaId::ALL {
            for &view in ViewKind::ALL {
                let request = request(formula, view);
                let gpu = renderer.render(&request).unwrap();
                let cpu = CpuGridRenderer.render(&request).unwrap();

                let agreeing = request
                    .resolution
                    .pixels()
                    .filter(|&pixel| is_black(&gpu, pixel) == is_black(&cpu, pixel))
                    .count();

                // Single precision flips a few pixels on the set boundary.
                assert!(
                    agreeing * 100 >= request.resolution.pixel_count() * 90,
                    "{} {}: {} of {} pixels agree",
                    formula,
                    view,
                    agreeing,
                    request.resolution.pixel_count()
                );
            }
        }
    }

    #[test]
    fn gpu_reuploads_colour_table_only_when_swapped() {
        let Some(mut renderer) = renderer() else {
            return;
        };
        let mut request = request(FormulaId::Standard, ViewKind::Julia);

        renderer.render(&request).unwrap();
        let first = renderer.colour_texture.as_ref().map(|t| t.is_for(&request.colour_table));

        request.colour_table = Arc::new(ColourLookupTable::build(ColourMapKind::Aqua, 1000).unwrap());
        renderer.render(&request).unwrap();
        let second = renderer.colour_texture.as_ref().map(|t| t.is_for(&request.colour_table));

        assert_eq!(first, Some(true));
        assert_eq!(second, Some(true));
    }
}
