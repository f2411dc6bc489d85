use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// The visible rectangle of the complex plane, `[[re_min, re_max], [im_min, im_max]]`.
///
/// Always has a strictly positive width and height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

pub const DEFAULT_REAL_INTERVAL: [f64; 2] = [-2.0, 2.0];
pub const DEFAULT_IMAG_INTERVAL: [f64; 2] = [-2.0, 2.0];

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ComplexRectError> {
        let width = max.real - min.real;
        let height = max.imag - min.imag;

        // written this way round so NaN spans are rejected too
        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    pub fn from_intervals(real: [f64; 2], imag: [f64; 2]) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex::new(real[0], imag[0]),
            Complex::new(real[1], imag[1]),
        )
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn real_interval(&self) -> [f64; 2] {
        [self.min.real, self.max.real]
    }

    #[must_use]
    pub fn imag_interval(&self) -> [f64; 2] {
        [self.min.imag, self.max.imag]
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            (self.min.real + self.max.real) / 2.0,
            (self.min.imag + self.max.imag) / 2.0,
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.min.real <= point.real
            && self.min.imag <= point.imag
            && self.max.real >= point.real
            && self.max.imag >= point.imag
    }
}

impl Default for ComplexRect {
    fn default() -> Self {
        Self {
            min: Complex::new(DEFAULT_REAL_INTERVAL[0], DEFAULT_IMAG_INTERVAL[0]),
            max: Complex::new(DEFAULT_REAL_INTERVAL[1], DEFAULT_IMAG_INTERVAL[1]),
        }
    }
}

impl fmt::Display for ComplexRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[[{}, {}], [{}, {}]]",
            self.min.real, self.max.real, self.min.imag, self.max.imag
        )
    }
}
