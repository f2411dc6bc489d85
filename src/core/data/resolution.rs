use crate::core::data::point::GridPoint;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    Zero,
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "resolution must be greater than zero"),
        }
    }
}

impl Error for ResolutionError {}

pub const DEFAULT_RESOLUTION: u32 = 400;

/// Side length of the square pixel grid, fixed for a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Resolution(u32);

impl Resolution {
    pub fn new(side: u32) -> Result<Self, ResolutionError> {
        if side == 0 {
            return Err(ResolutionError::Zero);
        }

        Ok(Self(side))
    }

    #[must_use]
    pub fn get(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.0 as usize * self.0 as usize
    }

    #[must_use]
    pub fn contains(&self, pixel: GridPoint) -> bool {
        pixel.x < self.0 && pixel.y < self.0
    }

    /// All pixels in row-major order, top row first.
    pub fn pixels(&self) -> impl Iterator<Item = GridPoint> + use<> {
        let side = self.0;

        (0..side).flat_map(move |y| (0..side).map(move |x| GridPoint { x, y }))
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self(DEFAULT_RESOLUTION)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_resolution_is_rejected() {
        assert_eq!(Resolution::new(0), Err(ResolutionError::Zero));
    }

    #[test]
    fn test_single_pixel_grid_is_allowed() {
        let resolution = Resolution::new(1).unwrap();

        assert_eq!(resolution.pixel_count(), 1);
        assert_eq!(resolution.pixels().collect::<Vec<_>>(), vec![GridPoint { x: 0, y: 0 }]);
    }

    #[test]
    fn test_pixels_are_row_major() {
        let resolution = Resolution::new(2).unwrap();
        let pixels: Vec<GridPoint> = resolution.pixels().collect();

        assert_eq!(
            pixels,
            vec![
                GridPoint { x: 0, y: 0 },
                GridPoint { x: 1, y: 0 },
                GridPoint { x: 0, y: 1 },
                GridPoint { x: 1, y: 1 },
            ]
        );
    }

    #[test]
    fn test_contains() {
        let resolution = Resolution::new(10).unwrap();

        assert!(resolution.contains(GridPoint { x: 9, y: 9 }));
        assert!(!resolution.contains(GridPoint { x: 10, y: 0 }));
        assert!(!resolution.contains(GridPoint { x: 0, y: 10 }));
    }

    #[test]
    fn test_default_resolution() {
        assert_eq!(Resolution::default().get(), DEFAULT_RESOLUTION);
        assert_eq!(Resolution::default().to_string(), "400x400");
    }
}
