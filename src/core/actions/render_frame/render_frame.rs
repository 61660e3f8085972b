use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::PackedColour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::viewport::Viewport;

/// Recomputes every pixel of `buffer`, row-major, on the calling thread.
pub fn render_frame<Alg, CMap>(
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    buffer: &mut PixelBuffer,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap,
{
    let width = buffer.width();
    let height = buffer.height();

    for (y, row) in buffer.rows_mut().enumerate() {
        render_row(viewport, algorithm, colour_map, y as u32, row, width, height);
    }
}

/// Fills one row. Shared by the sequential and parallel renderers so both
/// produce identical buffers.
pub(crate) fn render_row<Alg, CMap>(
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    y: u32,
    row: &mut [PackedColour],
    width: u32,
    height: u32,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap,
{
    for (x, pixel) in row.iter_mut().enumerate() {
        let point = viewport.pixel_to_plane(Point { x: x as u32, y }, width, height);
        *pixel = colour_map.map(algorithm.compute(point));
    }
}
