use std::error::Error;

use crate::controllers::snapshot::snapshot_controller;
use crate::core::actions::render_frame::RenderMode;
use crate::core::config::ExplorerConfig;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::input::cli::args::Cli;

/// Dispatches parsed arguments to the snapshot path or the interactive window.
pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = ExplorerConfig::default();
    let fractal = cli.fractal.fractal_kind();
    let render_mode = if cli.parallel {
        RenderMode::Parallel
    } else {
        RenderMode::Sequential
    };

    if let Some(path) = &cli.snapshot {
        return snapshot_controller(config, fractal, render_mode, path);
    }

    run_interactive(config, fractal, render_mode)
}

#[cfg(feature = "gui")]
fn run_interactive(
    config: ExplorerConfig,
    fractal: FractalKinds,
    render_mode: RenderMode,
) -> Result<(), Box<dyn Error>> {
    crate::input::gui::run_gui(config, fractal, render_mode)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run_interactive(
    _config: ExplorerConfig,
    _fractal: FractalKinds,
    _render_mode: RenderMode,
) -> Result<(), Box<dyn Error>> {
    Err("built without the `gui` feature; use --snapshot <PATH>".into())
}
