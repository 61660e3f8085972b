use crate::core::data::complex::Complex;
use std::fmt;

/// Which set is explored. Fixed for the lifetime of a view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia {
        constant: Complex,
    },
}

impl FractalKinds {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }
}

impl fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandelbrot => f.write_str(self.display_name()),
            Self::Julia { constant } => {
                write!(f, "{} (c = {} {:+}i)", self.display_name(), constant.real, constant.imag)
            }
        }
    }
}
