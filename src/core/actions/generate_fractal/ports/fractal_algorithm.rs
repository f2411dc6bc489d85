use crate::core::data::point::GridPoint;
use std::error::Error;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: GridPoint) -> Result<Self::Success, Self::Failure>;
}
