use rayon::prelude::*;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_frame::render_row;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::viewport::Viewport;

/// Recomputes every pixel of `buffer`, rows spread over rayon's pool.
///
/// Blocks until the whole frame is written; the result is identical to
/// [`render_frame`](super::render_frame::render_frame).
pub fn render_frame_parallel_rayon<Alg, CMap>(
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    buffer: &mut PixelBuffer,
) where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap + Sync,
{
    let width = buffer.width();
    let height = buffer.height();

    buffer
        .pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            render_row(viewport, algorithm, colour_map, y as u32, row, width, height);
        });
}
