mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::adapters::pixel_format::{BlitError, FrameLayout, PixelFormat, blit};
pub use crate::controllers::explorer::ExplorerController;
pub use crate::controllers::explorer::data::frame_data::FrameData;
pub use crate::controllers::explorer::ports::frame_sink::FrameSink;
pub use crate::controllers::snapshot::snapshot_controller;
pub use crate::core::actions::render_frame::{RenderMode, render};
pub use crate::core::config::{ConfigError, ExplorerConfig};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::fractals::escape_time::iterate;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::view_state::{PanDirection, ViewCommand, ViewState};
pub use crate::input::cli::args::Cli;
pub use crate::input::cli::run::run;
pub use crate::presenters::file::ppm::{PpmError, PpmFilePresenter, write_ppm};

#[cfg(feature = "gui")]
pub use crate::input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
