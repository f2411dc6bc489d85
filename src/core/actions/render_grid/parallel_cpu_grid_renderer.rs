use crate::core::actions::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::render_grid::cpu_grid_renderer::colour_escape_counts;
use crate::core::actions::render_grid::errors::RenderError;
use crate::core::actions::render_grid::ports::grid_renderer::GridRenderer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use std::time::Instant;

/// CPU renderer that spreads rows over rayon's global pool.
///
/// Output is bit-identical to [`CpuGridRenderer`](super::CpuGridRenderer).
#[derive(Debug, Default, Clone, Copy)]
pub struct ParallelCpuGridRenderer;

impl GridRenderer for ParallelCpuGridRenderer {
    fn backend_name(&self) -> &'static str {
        "parallel"
    }

    fn render(&mut self, request: &RenderRequest) -> Result<PixelBuffer, RenderError> {
        let start = Instant::now();
        let algorithm = EscapeTimeAlgorithm::from_request(request);
        let escape_counts = generate_fractal_parallel_rayon(request.resolution, &algorithm)?;
        let pixel_buffer = colour_escape_counts(escape_counts, request)?;

        log::debug!(
            "{} view rendered on {} rayon threads in {:?}",
            request.view,
            rayon::current_num_threads(),
            start.elapsed()
        );

        Ok(pixel_buffer)
    }
}
