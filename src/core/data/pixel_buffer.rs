use crate::core::data::colour::{BLACK, PackedColour};
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;
use std::slice::ChunksExactMut;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    InvalidSize {
        width: u32,
        height: u32,
    },
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel buffer size must be positive: {}x{}", width, height)
            }
            Self::PixelOutsideBounds {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x, pixel.y, width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Framebuffer of packed colours, row-major, `width * height` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<PackedColour>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![BLACK; width as usize * height as usize],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[PackedColour] {
        &self.pixels
    }

    #[must_use]
    pub fn contains(&self, pixel: Point) -> bool {
        pixel.x < self.width && pixel.y < self.height
    }

    #[must_use]
    pub fn get(&self, pixel: Point) -> Option<PackedColour> {
        self.contains(pixel).then(|| self.pixels[self.index(pixel)])
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: PackedColour) -> Result<(), PixelBufferError> {
        if !self.contains(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        let index = self.index(pixel);
        self.pixels[index] = colour;

        Ok(())
    }

    /// Mutable rows, top to bottom, each exactly `width` pixels long.
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, PackedColour> {
        self.pixels.chunks_exact_mut(self.width as usize)
    }

    /// The whole backing slice, for callers that split rows themselves.
    pub fn pixels_mut(&mut self) -> &mut [PackedColour] {
        &mut self.pixels
    }

    fn index(&self, pixel: Point) -> usize {
        pixel.y as usize * self.width as usize + pixel.x as usize
    }
}
