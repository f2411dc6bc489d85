use crate::core::data::complex::Complex;
use crate::core::fractals::formula::FormulaId;

/// Advances a point one step along its orbit under `formula` with parameter `c`.
#[must_use]
pub fn step_orbit(z: Complex, c: Complex, formula: FormulaId) -> Complex {
    formula.iterate(z, c)
}

/// The first `steps` points visited after `z`, not including `z` itself.
///
/// The orbit is not stopped at the escape radius, matching what the pointer
/// animation shows; callers that draw it should stop at the first non-finite
/// point.
#[must_use]
pub fn orbit(z: Complex, c: Complex, formula: FormulaId, steps: usize) -> Vec<Complex> {
    std::iter::successors(Some(z), |&current| Some(step_orbit(current, c, formula)))
        .skip(1)
        .take(steps)
        .collect()
}
