use crate::core::data::complex::Complex;

/// Escape-time evaluation of a single plane coordinate.
pub trait FractalAlgorithm {
    /// Iterations before the orbit escapes, in `[0, max_iterations]`.
    fn compute(&self, point: Complex) -> u32;

    fn max_iterations(&self) -> u32;
}
