use crate::core::data::colour::Colour;
use std::error::Error;

/// Maps one per-pixel value, such as an escape count, to a display colour.
pub trait ColourMap {
    type T;
    type Failure: Error;

    fn map(&self, value: Self::T) -> Result<Colour, Self::Failure>;
}
