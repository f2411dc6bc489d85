use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::GridPoint;
use crate::core::data::resolution::Resolution;

/// Row-parallel version of
/// [`generate_fractal`](crate::core::actions::generate_fractal::generate_fractal::generate_fractal)
/// on rayon's work-stealing pool.
///
/// Rows are computed independently and concatenated in order, so the output
/// is identical to the sequential generator's.
pub fn generate_fractal_parallel_rayon<Alg>(
    resolution: Resolution,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let side = resolution.get();

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..side)
        .into_par_iter()
        .map(|y| {
            (0..side)
                .map(|x| algorithm.compute(GridPoint { x, y }))
                .collect()
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
