use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;

#[derive(Debug, Parser)]
#[command(name = "fractal_viewer", version, about = "Interactive Mandelbrot and Julia set viewer")]
pub struct Cli {
    #[command(subcommand)]
    pub fractal: FractalArgs,

    /// Spread each frame's rows over all cores.
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Render the initial view to a PPM file and exit without opening a window.
    #[arg(long, global = true, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Subcommand)]
pub enum FractalArgs {
    /// Explore the Mandelbrot set.
    Mandelbrot,
    /// Explore the Julia set for the constant c = <REAL> + <IMAG>i.
    #[command(allow_negative_numbers = true)]
    Julia {
        #[arg(value_parser = parse_signed_decimal, value_name = "REAL", allow_hyphen_values = true)]
        real: f64,
        #[arg(value_parser = parse_signed_decimal, value_name = "IMAG", allow_hyphen_values = true)]
        imag: f64,
    },
}

impl FractalArgs {
    #[must_use]
    pub fn fractal_kind(self) -> FractalKinds {
        match self {
            Self::Mandelbrot => FractalKinds::Mandelbrot,
            Self::Julia { real, imag } => FractalKinds::Julia {
                constant: Complex::new(real, imag),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    NotADecimal(String),
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotADecimal(value) => write!(
                f,
                "'{}' is not a decimal number (expected an optional sign, digits and at most one '.')",
                value
            ),
        }
    }
}

impl Error for ArgumentError {}

/// Accepts `[+-]digits[.digits]`: at least one digit, at most one point,
/// no exponents, no `inf`/`nan`.
pub fn parse_signed_decimal(value: &str) -> Result<f64, ArgumentError> {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let has_digit = unsigned.chars().any(|c| c.is_ascii_digit());
    let only_digits_and_points = unsigned.chars().all(|c| c.is_ascii_digit() || c == '.');
    let points = unsigned.chars().filter(|&c| c == '.').count();

    if !has_digit || !only_digits_and_points || points > 1 {
        return Err(ArgumentError::NotADecimal(value.to_string()));
    }

    value
        .parse()
        .map_err(|_| ArgumentError::NotADecimal(value.to_string()))
}
