use crate::core::actions::render_grid::errors::RenderError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;

/// Turns a render request into a full RGBA grid.
///
/// Every backend honours the same contract: row-major output, alpha 255,
/// black for escape count 0. `render` blocks until the whole grid is done
/// and is never interrupted part way. Backends may cache device state
/// between calls, hence `&mut self`.
pub trait GridRenderer: Send {
    fn backend_name(&self) -> &'static str;

    fn render(&mut self, request: &RenderRequest) -> Result<PixelBuffer, RenderError>;
}

impl GridRenderer for Box<dyn GridRenderer> {
    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }

    fn render(&mut self, request: &RenderRequest) -> Result<PixelBuffer, RenderError> {
        (**self).render(request)
    }
}
