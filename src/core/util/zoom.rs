use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};

/// Zooms in by this factor.
pub const ZOOM_IN: f64 = 0.5;
/// Zooms out by this factor.
pub const ZOOM_OUT: f64 = 2.0;

/// A domain `factor` times the size of `domain`, centred on `center`.
///
/// `factor < 1` zooms in. There is no lower bound on the span: repeated
/// zooming in stops shrinking it at the `f64` precision floor, a couple of
/// ulps around `center`, and from there returns the same domain. A factor
/// that is not positive returns [`ComplexRectError::InvalidSize`].
pub fn zoom(
    domain: ComplexRect,
    factor: f64,
    center: Complex,
) -> Result<ComplexRect, ComplexRectError> {
    let half_width = domain.width() * factor / 2.0;
    let half_height = domain.height() * factor / 2.0;

    ComplexRect::from_intervals(
        [center.real - half_width, center.real + half_width],
        [center.imag - half_height, center.imag + half_height],
    )
}
