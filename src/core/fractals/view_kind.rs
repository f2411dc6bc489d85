use crate::core::data::complex::Complex;

/// Which of the two linked views a render is for.
///
/// The views run the same escape-time loop; they differ only in which of
/// `z0` and `c` is the plane coordinate under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewKind {
    #[default]
    Mandelbrot,
    Julia,
}

impl ViewKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    /// Lowercase name used in file names and log lines.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
        }
    }

    #[must_use]
    pub const fn from_is_julia(is_julia: bool) -> Self {
        if is_julia { Self::Julia } else { Self::Mandelbrot }
    }

    #[must_use]
    pub const fn is_julia(self) -> bool {
        matches!(self, Self::Julia)
    }

    /// Returns `(z0, c)` for a pixel whose plane coordinate is `point`.
    ///
    /// `fixed` is the start value for the Mandelbrot view and the parameter
    /// for the Julia view.
    #[must_use]
    #[inline]
    pub fn seed(self, point: Complex, fixed: Complex) -> (Complex, Complex) {
        match self {
            Self::Mandelbrot => (fixed, point),
            Self::Julia => (point, fixed),
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
