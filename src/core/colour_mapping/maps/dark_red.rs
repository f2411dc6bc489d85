use crate::core::colour_mapping::gradient::{ColourGradient, clamp_unit, phased_sine};
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

/// The aqua gradient run backwards: fast escapes are dark, slow ones bright.
#[derive(Debug, Default)]
pub struct DarkRedGradient;

impl ColourGradient for DarkRedGradient {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::DarkRed
    }

    fn colour_at(&self, t: f64) -> Colour {
        phased_sine(1.0 - clamp_unit(t))
    }
}
