#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Reserved for points that did not escape.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Rounds a channel intensity to the nearest byte, clamping to `[0, 255]`.
    #[must_use]
    pub fn channel(value: f64) -> u8 {
        value.round().clamp(0.0, 255.0) as u8
    }
}
