//! The closed set of escape-time formulas.
//!
//! Each formula is an iteration map `z -> f(z, c)`, a divergence measure of
//! `z`, and an escape radius. The GPU program in `src/gpu/escape_time.wgsl`
//! mirrors the `match` arms here one for one, keyed by [`FormulaId::shader_tag`].

use crate::core::data::complex::Complex;
use crate::core::fractals::errors::FormulaError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormulaId {
    #[default]
    Standard,
    Hyperbolic,
    Cubic,
    Quartic,
    BurningShip,
    Tricorn,
}

impl FormulaId {
    pub const ALL: &'static [Self] = &[
        Self::Standard,
        Self::Hyperbolic,
        Self::Cubic,
        Self::Quartic,
        Self::BurningShip,
        Self::Tricorn,
    ];

    /// Identifier used by configuration and the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Hyperbolic => "hyperbolic",
            Self::Cubic => "cubic",
            Self::Quartic => "quartic",
            Self::BurningShip => "burning_ship",
            Self::Tricorn => "tricorn",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Hyperbolic => "Hyperbolic",
            Self::Cubic => "Cubic",
            Self::Quartic => "Quartic",
            Self::BurningShip => "Burning ship",
            Self::Tricorn => "Tricorn",
        }
    }

    /// Enumerated tag the GPU program switches on.
    #[must_use]
    pub const fn shader_tag(self) -> u32 {
        match self {
            Self::Standard => 0,
            Self::Hyperbolic => 1,
            Self::Cubic => 2,
            Self::Quartic => 3,
            Self::BurningShip => 4,
            Self::Tricorn => 5,
        }
    }

    /// One application of the iteration map.
    #[must_use]
    #[inline]
    pub fn iterate(self, z: Complex, c: Complex) -> Complex {
        let Complex { real: x, imag: y } = z;

        match self {
            Self::Standard => Complex::new(x * x - y * y + c.real, 2.0 * x * y + c.imag),
            Self::Hyperbolic => Complex::new(x * x + y * y + c.real, 2.0 * x * y - c.imag),
            Self::Cubic => Complex::new(
                x * x * x - 3.0 * x * y * y + c.real,
                3.0 * x * x * y - y * y * y + c.imag,
            ),
            Self::Quartic => Complex::new(
                x * x * x * x - 6.0 * x * x * y * y + y * y * y * y + c.real,
                4.0 * x * x * x * y - 4.0 * x * y * y * y + c.imag,
            ),
            Self::BurningShip => {
                Complex::new(x * x - y * y + c.real, (2.0 * x * y).abs() + c.imag)
            }
            Self::Tricorn => Complex::new(x * x - y * y + c.real, -2.0 * x * y + c.imag),
        }
    }

    /// Compared against `escape_radius²`, in absolute value, since the
    /// hyperbolic and tricorn measures are signed.
    #[must_use]
    #[inline]
    pub fn divergence_measure(self, z: Complex) -> f64 {
        match self {
            Self::Hyperbolic | Self::Tricorn => z.real * z.real - z.imag * z.imag,
            Self::Standard | Self::Cubic | Self::Quartic | Self::BurningShip => {
                z.magnitude_squared()
            }
        }
    }

    #[must_use]
    pub const fn escape_radius(self) -> f64 {
        match self {
            Self::Hyperbolic => 10.0,
            Self::Standard | Self::Cubic | Self::Quartic | Self::BurningShip | Self::Tricorn => 2.0,
        }
    }

    #[must_use]
    pub fn escape_radius_squared(self) -> f64 {
        let radius = self.escape_radius();
        radius * radius
    }

    #[must_use]
    #[inline]
    pub fn has_escaped(self, z: Complex) -> bool {
        self.divergence_measure(z).abs() >= self.escape_radius_squared()
    }
}

impl fmt::Display for FormulaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FormulaId {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");

        Self::ALL
            .iter()
            .copied()
            .find(|formula| formula.id() == normalised)
            .ok_or_else(|| FormulaError::UnknownFormula(s.to_string()))
    }
}
