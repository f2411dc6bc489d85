use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

/// A pure function from a normalised value to a colour.
///
/// `t` is expected in `[0, 1]`; implementations clamp anything outside.
pub trait ColourGradient: Send + Sync {
    fn kind(&self) -> ColourMapKind;

    fn colour_at(&self, t: f64) -> Colour;

    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }
}

/// Three sine lobes a third of a period apart. Negative lobes clamp to 0.
pub(crate) fn phased_sine(t: f64) -> Colour {
    use std::f64::consts::PI;

    Colour {
        r: Colour::channel(255.0 * (PI * t).sin()),
        g: Colour::channel(255.0 * (PI * (t + 1.0 / 3.0)).sin()),
        b: Colour::channel(255.0 * (PI * (t + 2.0 / 3.0)).sin()),
    }
}

#[inline]
pub(crate) fn clamp_unit(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}
