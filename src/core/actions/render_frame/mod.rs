pub mod ports;
pub mod render_frame;
pub mod render_frame_parallel_rayon;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::actions::render_frame::render_frame_parallel_rayon::render_frame_parallel_rayon;
use crate::core::config::ExplorerConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::colour_map::EscapeTimeColourMap;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::view_state::ViewState;
use crate::core::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Row-major on the owning thread.
    #[default]
    Sequential,
    /// Rows distributed over rayon's pool; same output.
    Parallel,
}

/// Redraws the whole frame for `view` into `buffer`.
pub fn render(view: &ViewState, config: &ExplorerConfig, buffer: &mut PixelBuffer, mode: RenderMode) {
    let viewport = view.viewport();
    let colour_map = EscapeTimeColourMap::new(
        view.colour_scheme(),
        config.max_iterations,
        view.iteration_limit(),
    );

    match view.fractal() {
        FractalKinds::Mandelbrot => {
            let algorithm = MandelbrotAlgorithm::new(config.max_iterations);
            render_with(mode, &viewport, &algorithm, &colour_map, buffer);
        }
        FractalKinds::Julia { constant } => {
            let algorithm = JuliaAlgorithm::new(constant, config.max_iterations);
            render_with(mode, &viewport, &algorithm, &colour_map, buffer);
        }
    }
}

fn render_with<Alg, CMap>(
    mode: RenderMode,
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    buffer: &mut PixelBuffer,
) where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap + Sync,
{
    log::trace!(
        "rendering {}x{} ({:?}, cap {}, {})",
        buffer.width(),
        buffer.height(),
        mode,
        algorithm.max_iterations(),
        colour_map.display_name()
    );

    match mode {
        RenderMode::Sequential => render_frame(viewport, algorithm, colour_map, buffer),
        RenderMode::Parallel => render_frame_parallel_rayon(viewport, algorithm, colour_map, buffer),
    }
}
