use std::path::Path;

use crate::controllers::explorer::ExplorerController;
use crate::core::actions::render_frame::RenderMode;
use crate::core::config::ExplorerConfig;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::presenters::file::ppm::PpmFilePresenter;

/// Renders the initial view once, without a window, and saves it as PPM.
pub fn snapshot_controller(
    config: ExplorerConfig,
    fractal: FractalKinds,
    render_mode: RenderMode,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!(
        "rendering {} snapshot ({}x{}, {:?})",
        fractal,
        config.width,
        config.height,
        render_mode
    );

    let presenter = PpmFilePresenter::new(path);
    let mut controller = ExplorerController::new(config, fractal, render_mode, presenter)?;
    controller.redraw_if_dirty()?;

    Ok(())
}
