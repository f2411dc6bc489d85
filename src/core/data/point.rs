/// A position on the pixel grid in continuous pixel units.
///
/// Pointer positions and the inverse plane mapping are not whole pixels,
/// so both axes are real-valued.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The integer address of one pixel, column `x` and row `y`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl From<GridPoint> for Point {
    fn from(pixel: GridPoint) -> Self {
        Self {
            x: f64::from(pixel.x),
            y: f64::from(pixel.y),
        }
    }
}
