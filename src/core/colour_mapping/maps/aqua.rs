use crate::core::colour_mapping::gradient::{ColourGradient, clamp_unit, phased_sine};
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

#[derive(Debug, Default)]
pub struct AquaGradient;

impl ColourGradient for AquaGradient {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Aqua
    }

    fn colour_at(&self, t: f64) -> Colour {
        phased_sine(clamp_unit(t))
    }
}
