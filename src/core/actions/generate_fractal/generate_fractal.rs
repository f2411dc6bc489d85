use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::resolution::Resolution;

/// Evaluates `algorithm` at every pixel of the grid, row-major.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    resolution: Resolution,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    resolution
        .pixels()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
