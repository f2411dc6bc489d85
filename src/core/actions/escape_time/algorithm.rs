use crate::core::actions::escape_time::escape_time::escape_time;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::GridPoint;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::formula::FormulaId;
use crate::core::fractals::view_kind::ViewKind;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Escape-time evaluation of one view, addressed by grid pixel.
///
/// The Mandelbrot and Julia views share this type; `view` decides whether
/// the pixel's plane coordinate is `c` or `z0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    resolution: Resolution,
    domain: ComplexRect,
    formula: FormulaId,
    view: ViewKind,
    fixed: Complex,
    max_iterations: u32,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: GridPoint) -> Result<Self::Success, Self::Failure> {
        let point = pixel_to_complex_coords(pixel, self.domain, self.resolution)?;
        let (z0, c) = self.view.seed(point, self.fixed);

        Ok(escape_time(z0, c, self.formula, self.max_iterations))
    }
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(
        resolution: Resolution,
        domain: ComplexRect,
        formula: FormulaId,
        view: ViewKind,
        fixed: Complex,
        max_iterations: u32,
    ) -> Self {
        Self {
            resolution,
            domain,
            formula,
            view,
            fixed,
            max_iterations,
        }
    }

    #[must_use]
    pub fn from_request(request: &RenderRequest) -> Self {
        Self::new(
            request.resolution,
            request.domain,
            request.formula,
            request.view,
            request.fixed,
            request.max_iterations,
        )
    }
}
