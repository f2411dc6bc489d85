use crate::core::data::complex::Complex;
use crate::core::fractals::formula::FormulaId;

/// Escape iteration of `z0` under `formula` with parameter `c`, or 0.
///
/// Iteration `n` starts at 1 and runs while `n < max_iterations`; the first
/// `n` at which `|divergence_measure(z)| >= escape_radius²` is returned. 0
/// means the orbit stayed bounded within the budget, so a cap of 0 or 1
/// returns 0 without evaluating the formula.
///
/// Non-finite inputs are not checked. NaN compares false against the escape
/// radius and reads as bounded.
#[must_use]
#[inline]
pub fn escape_time(z0: Complex, c: Complex, formula: FormulaId, max_iterations: u32) -> u32 {
    let mut z = z0;
    let mut n = 1;

    while n < max_iterations {
        if formula.has_escaped(z) {
            return n;
        }
        z = formula.iterate(z, c);
        n += 1;
    }

    0
}
