use crate::core::fractals::colour_scheme::ColourScheme;
use std::{error::Error, fmt};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_MAX_ITERATIONS: u32 = 150;
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_ITERATION_LIMIT: u32 = 50;
pub const ZOOM_FACTOR: f64 = 1.1;
pub const PAN_STEP: f64 = 0.15;
pub const ITERATION_STEP: u32 = 10;
pub const MIN_ITERATION_LIMIT: u32 = ITERATION_STEP;
pub const MIN_ZOOM: f64 = 1e-9;
pub const MAX_ZOOM: f64 = 1e14;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidSize { width: u32, height: u32 },
    ZeroMaxIterationsError,
    InvalidZoom(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "frame size must be positive: {}x{}", width, height)
            }
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidZoom(zoom) => {
                write!(f, "zoom must be finite and greater than zero, got {}", zoom)
            }
        }
    }
}

impl Error for ConfigError {}

/// Fixed explorer parameters. Nothing here changes after startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    /// Hard cap on iterations per evaluation.
    pub max_iterations: u32,
    pub initial_zoom: f64,
    /// Starting value of the soft colouring cutoff.
    pub initial_iteration_limit: u32,
    pub initial_colour_scheme: ColourScheme,
    pub zoom_factor: f64,
    pub pan_step: f64,
    pub iteration_step: u32,
    pub min_iteration_limit: u32,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_zoom: DEFAULT_ZOOM,
            initial_iteration_limit: DEFAULT_ITERATION_LIMIT,
            initial_colour_scheme: ColourScheme::default(),
            zoom_factor: ZOOM_FACTOR,
            pan_step: PAN_STEP,
            iteration_step: ITERATION_STEP,
            min_iteration_limit: MIN_ITERATION_LIMIT,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterationsError);
        }

        if !(self.initial_zoom.is_finite() && self.initial_zoom > 0.0) {
            return Err(ConfigError::InvalidZoom(self.initial_zoom));
        }

        Ok(())
    }
}
