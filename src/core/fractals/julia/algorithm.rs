use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::iterate;

/// Orbit starts at the plane coordinate; `constant` is fixed for the whole set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    constant: Complex,
    max_iterations: u32,
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn compute(&self, point: Complex) -> u32 {
        iterate(point, self.constant, self.max_iterations)
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(constant: Complex, max_iterations: u32) -> Self {
        Self {
            constant,
            max_iterations,
        }
    }
}
