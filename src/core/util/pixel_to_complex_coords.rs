//! Linear maps between the pixel grid and the complex plane.
//!
//! Row 0 is the top of the image and holds the domain's maximum imaginary
//! part; the imaginary axis runs opposite to array order. Every renderer and
//! every pointer placement goes through these functions so the convention
//! cannot drift between views.

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::{GridPoint, Point};
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideGrid {
        pixel: GridPoint,
        resolution: Resolution,
    },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { pixel, resolution } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the {} grid",
                    pixel.x, pixel.y, resolution
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// `re = px / R * width + re_min`, `im = (1 - py / R) * height + im_min`.
#[must_use]
#[inline]
pub fn pixel_to_plane(pixel: Point, domain: ComplexRect, resolution: Resolution) -> Complex {
    let side = f64::from(resolution.get());
    let min = domain.min();

    Complex {
        real: pixel.x / side * domain.width() + min.real,
        imag: (1.0 - pixel.y / side) * domain.height() + min.imag,
    }
}

/// Inverse of [`pixel_to_plane`].
#[must_use]
pub fn plane_to_pixel(point: Complex, domain: ComplexRect, resolution: Resolution) -> Point {
    let side = f64::from(resolution.get());
    let min = domain.min();

    Point {
        x: (point.real - min.real) / domain.width() * side,
        y: (1.0 - (point.imag - min.imag) / domain.height()) * side,
    }
}

/// Plane coordinate of a whole grid pixel, rejecting pixels off the grid.
pub fn pixel_to_complex_coords(
    pixel: GridPoint,
    domain: ComplexRect,
    resolution: Resolution,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !resolution.contains(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideGrid { pixel, resolution });
    }

    Ok(pixel_to_plane(pixel.into(), domain, resolution))
}
