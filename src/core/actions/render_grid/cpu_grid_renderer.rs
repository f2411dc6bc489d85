use crate::core::actions::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::render_grid::errors::RenderError;
use crate::core::actions::render_grid::ports::grid_renderer::GridRenderer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use std::time::Instant;

/// Single-threaded renderer. Blocks the caller for the full
/// `resolution² × max_iterations` worst case.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuGridRenderer;

impl GridRenderer for CpuGridRenderer {
    fn backend_name(&self) -> &'static str {
        "cpu"
    }

    fn render(&mut self, request: &RenderRequest) -> Result<PixelBuffer, RenderError> {
        let start = Instant::now();
        let algorithm = EscapeTimeAlgorithm::from_request(request);
        let escape_counts = generate_fractal(request.resolution, &algorithm)?;
        let pixel_buffer = colour_escape_counts(escape_counts, request)?;

        log::debug!(
            "{} view rendered on cpu in {:?}",
            request.view,
            start.elapsed()
        );

        Ok(pixel_buffer)
    }
}

/// Colours escape counts through the request's lookup table.
pub(crate) fn colour_escape_counts(
    escape_counts: Vec<u32>,
    request: &RenderRequest,
) -> Result<PixelBuffer, RenderError> {
    let colour_map = request.colour_table.for_max_iterations(request.max_iterations);

    Ok(generate_pixel_buffer(
        escape_counts,
        &colour_map,
        request.resolution,
    )?)
}
