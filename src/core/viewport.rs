use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

/// Affine pixel → plane transform.
///
/// The frame centre maps to `(shift_x, shift_y)`; at zoom 1 the frame spans
/// `[-1, 1)` on each axis around that centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub shift_x: f64,
    pub shift_y: f64,
}

impl Viewport {
    #[must_use]
    pub fn pixel_to_plane(&self, pixel: Point, width: u32, height: u32) -> Complex {
        let width = width as f64;
        let height = height as f64;

        Complex {
            real: (pixel.x as f64 - width / 2.0) / (0.5 * self.zoom * width) + self.shift_x,
            imag: (pixel.y as f64 - height / 2.0) / (0.5 * self.zoom * height) + self.shift_y,
        }
    }
}
