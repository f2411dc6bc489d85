use crate::core::colour_mapping::gradient::{ColourGradient, clamp_unit};
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use std::f64::consts::FRAC_PI_2;

/// Power-law blend from blue to yellow.
#[derive(Debug, Default)]
pub struct ViridisGradient;

impl ColourGradient for ViridisGradient {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Viridis
    }

    fn colour_at(&self, t: f64) -> Colour {
        let t = clamp_unit(t);

        Colour {
            r: Colour::channel(255.0 * (FRAC_PI_2 * t).sin().powf(1.5)),
            g: Colour::channel(255.0 * t.sqrt()),
            b: Colour::channel(255.0 * (FRAC_PI_2 * t).cos()),
        }
    }
}
