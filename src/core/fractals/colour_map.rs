use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::{BLACK, PackedColour};
use crate::core::fractals::colour_scheme::ColourScheme;

/// Banded colouring: `iterations * multiplier`, wrapping at 32 bits.
///
/// Points that hit the hard cap, or reach the soft iteration limit, are black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeColourMap {
    scheme: ColourScheme,
    max_iterations: u32,
    iteration_limit: u32,
}

impl ColourMap for EscapeTimeColourMap {
    fn map(&self, iterations: u32) -> PackedColour {
        if iterations == self.max_iterations || iterations >= self.iteration_limit {
            return BLACK;
        }

        iterations.wrapping_mul(self.scheme.multiplier())
    }

    fn display_name(&self) -> &str {
        self.scheme.display_name()
    }
}

impl EscapeTimeColourMap {
    #[must_use]
    pub fn new(scheme: ColourScheme, max_iterations: u32, iteration_limit: u32) -> Self {
        Self {
            scheme,
            max_iterations,
            iteration_limit,
        }
    }
}
